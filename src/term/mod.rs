/*!
## Terminal front-end

Drives a [`Runtime`](crate::mach::Runtime) from an interactive line editor.
Script output, prompts, waits and file requests arrive as events and are
fulfilled here.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;

pub mod host;
mod repo;

pub use repo::{Script, ScriptRepository, SAMPLE, TEMPLATE};

use crate::config::Config;
use crate::lang::Error;
use crate::mach::{Event, Runtime};
use ansi_term::{Colour, Style};
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const BANNER: &str = "ZeroShell 0.10 - ZeroBasics interpreter";
const DEFAULT_PROMPT: &str = "Input: ";
const WAIT_SLICE: Duration = Duration::from_millis(50);

/// Run one script when `script` is given, otherwise start the shell.
pub fn main(config: Config, script: Option<String>) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }
    let result = Shell::new(config, interrupted).and_then(|mut shell| match script {
        Some(name) => shell.run_script(&name).map(|_| ()),
        None => shell.main_loop(),
    });
    if let Err(error) = result {
        eprintln!("{}", error);
    }
}

struct Shell {
    config: Config,
    repo: ScriptRepository,
    runtime: Runtime,
    command: Interface<DefaultTerminal>,
    input: Interface<DefaultTerminal>,
    interrupted: Arc<AtomicBool>,
}

impl Shell {
    fn new(config: Config, interrupted: Arc<AtomicBool>) -> io::Result<Shell> {
        let input = Interface::new("Input")?;
        input.set_report_signal(Signal::Interrupt, true);
        let shell = Shell {
            repo: ScriptRepository::new(&config.scripts_dir),
            runtime: Runtime::with_config(config.clone()),
            config,
            command: Interface::new("ZeroShell")?,
            input,
            interrupted,
        };
        match shell.repo.ensure_layout() {
            Ok(true) => {
                shell.say(&format!(
                    "Created folder '{}' for your scripts",
                    shell.repo.dir().display()
                ))?;
                shell.say("Scripts are plain .txt files")?;
                shell.say(&format!(
                    "Created sample script: {}",
                    shell.repo.dir().join("test.txt").display()
                ))?;
            }
            Ok(false) => {}
            Err(error) => shell.report(&error)?,
        }
        Ok(shell)
    }

    fn say(&self, s: &str) -> io::Result<()> {
        self.command.write_fmt(format_args!("{}\n", s))
    }

    fn report(&self, error: &Error) -> io::Result<()> {
        self.command.write_fmt(format_args!(
            "{}\n",
            Style::new().bold().paint(error.to_string())
        ))
    }

    fn rule(&self, width: usize) -> io::Result<()> {
        self.say(&"=".repeat(width))
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.rule(60)?;
        self.say(BANNER)?;
        self.rule(60)?;
        self.say("Type !help for help")?;
        self.say(&"-".repeat(60))?;
        loop {
            let prompt = match self.repo.list() {
                Ok(scripts) => format!("ZB[{} scripts]> ", scripts.len()),
                Err(_) => "ZB[no scripts folder]> ".to_string(),
            };
            self.command.set_prompt(&prompt)?;
            let line = match self.command.read_line()? {
                ReadResult::Input(line) => line,
                ReadResult::Signal(_) | ReadResult::Eof => break,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            self.command.add_history_unique(line.to_string());
            let (word, rest) = match line.find(char::is_whitespace) {
                Some(index) => (&line[..index], line[index..].trim()),
                None => (line, ""),
            };
            debug!(command = %line, "shell");
            match word.to_ascii_lowercase().as_str() {
                "!exit" => {
                    self.say("Leaving ZeroShell...")?;
                    break;
                }
                "!help" => self.help()?,
                "!run" if !rest.is_empty() => {
                    if !self.run_script(rest)? {
                        break;
                    }
                }
                "!run" => self.say("Name the script: !run myscript.txt")?,
                "!list" => self.list()?,
                "!new" if !rest.is_empty() => match self.repo.create(rest) {
                    Ok(path) => {
                        self.say(&format!("Created new script: {}", rest))?;
                        self.say(&format!("Path: {}", path.display()))?;
                    }
                    Err(error) => self.report(&error)?,
                },
                "!new" => self.say("Name the script: !new myscript")?,
                "!edit" if !rest.is_empty() => self.edit(rest)?,
                "!edit" => self.say("Name the script: !edit myscript.txt")?,
                "!clear" => {
                    self.command.write_fmt(format_args!("\x1b[2J\x1b[H"))?;
                    self.say(BANNER)?;
                    self.rule(60)?;
                }
                "!dir" => self.dir()?,
                _ => {
                    if self.runtime.enter(line) && !self.pump()? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn help(&self) -> io::Result<()> {
        self.say("")?;
        self.rule(60)?;
        self.say("ZEROSHELL COMMANDS:")?;
        self.rule(60)?;
        self.say("!run <script>    - Run a script")?;
        self.say("!list            - List scripts")?;
        self.say("!new <name>      - Create a new script")?;
        self.say("!edit <script>   - Show a script for editing")?;
        self.say("!clear           - Clear the screen")?;
        self.say("!dir             - Show the scripts folder")?;
        self.say("!help            - This help")?;
        self.say("!exit            - Quit")?;
        self.rule(60)?;
        self.say(&format!(
            "\nSCRIPTS ARE KEPT IN: {}",
            self.repo.dir().display()
        ))?;
        self.say("Any other line runs as a ZeroBasics command.")?;
        self.rule(60)
    }

    fn list(&self) -> io::Result<()> {
        self.say("")?;
        self.rule(60)?;
        self.say(&format!("SCRIPTS IN {}:", self.repo.dir().display()))?;
        self.rule(60)?;
        match self.repo.list() {
            Ok(scripts) if scripts.is_empty() => {
                self.say("No scripts. Create one: !new myscript")?
            }
            Ok(scripts) => {
                for (index, (name, size)) in scripts.iter().enumerate() {
                    self.say(&format!("{:3}. {:30} ({} bytes)", index + 1, name, size))?;
                }
            }
            Err(error) => self.report(&error)?,
        }
        self.rule(60)
    }

    fn edit(&self, name: &str) -> io::Result<()> {
        match self.repo.read(name) {
            Ok((path, text)) => {
                self.say(&format!("Editing: {}", path.display()))?;
                self.say(&"-".repeat(40))?;
                self.say(text.trim_end())?;
                self.say(&"-".repeat(40))?;
                self.say("Use an external editor to change the file.")
            }
            Err(error) => self.report(&error),
        }
    }

    fn dir(&self) -> io::Result<()> {
        self.say("")?;
        self.rule(60)?;
        self.say("SCRIPTS FOLDER:")?;
        self.rule(60)?;
        if !self.repo.exists() {
            self.say("The scripts folder does not exist.")?;
            return self.rule(60);
        }
        let path = self.repo.dir();
        let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.say(&format!("Path: {}", absolute.display()))?;
        let scripts = self.repo.list().map(|s| s.len()).unwrap_or(0);
        self.say(&format!("Scripts: {}", scripts))?;
        self.say(&format!("Projects: {}", self.repo.project_count()))?;
        self.rule(60)
    }

    /// Load and run a script. False when the terminal closed.
    fn run_script(&mut self, name: &str) -> io::Result<bool> {
        self.say(&format!("\nLoading script: {}", name))?;
        self.rule(50)?;
        let script = match self.repo.load(name) {
            Ok(script) => script,
            Err(error) => {
                self.report(&error)?;
                return Ok(true);
            }
        };
        debug!(path = %script.path.display(), "run script");
        self.runtime.load(&script.text, Some(script.project_dir));
        if let Err(error) = self.runtime.run() {
            self.report(&error)?;
            return Ok(true);
        }
        let open = self.pump()?;
        if open {
            self.rule(50)?;
        }
        Ok(open)
    }

    /// Service runtime events until it stops. False when the terminal closed.
    fn pump(&mut self) -> io::Result<bool> {
        loop {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                self.runtime.interrupt();
            }
            match self.runtime.execute(5000) {
                Event::Stopped => return Ok(true),
                Event::Running => {}
                Event::Print(text, colour) => self.print(&text, colour.as_deref())?,
                Event::Input(prompt) => {
                    let prompt = match prompt {
                        Some(prompt) => format!("{} ", prompt),
                        None => DEFAULT_PROMPT.to_string(),
                    };
                    self.input.set_prompt(&prompt)?;
                    match self.input.read_line()? {
                        ReadResult::Input(string) => {
                            self.runtime.enter(&string);
                        }
                        ReadResult::Signal(Signal::Interrupt) => {
                            self.input.set_buffer("")?;
                            self.input.lock_reader().cancel_read_line()?;
                            self.runtime.interrupt();
                        }
                        ReadResult::Signal(_) | ReadResult::Eof => {
                            self.runtime.interrupt();
                            return Ok(false);
                        }
                    }
                }
                Event::Wait(duration) => self.sleep(duration),
                Event::Save { path, contents } => match host::save(&path, &contents) {
                    Ok(()) => self.say(&format!("Saved: {}", path.display()))?,
                    Err(error) => self.io_failure(&path, error)?,
                },
                Event::CreateDir(path) => match host::create_dir(&path) {
                    Ok(true) => self.say(&format!("Created folder: {}", path.display()))?,
                    Ok(false) => {}
                    Err(error) => self.io_failure(&path, error)?,
                },
                Event::Shell(command) => match host::shell(&command) {
                    Ok(status) if !status.success() => {
                        warn!(%command, %status, "host command failed");
                    }
                    Ok(_) => {}
                    Err(error) => {
                        warn!(%command, %error, "host command not started");
                        self.report(&Error::from(error))?;
                    }
                },
                Event::Errors(errors) => {
                    for error in errors.iter() {
                        self.report(error)?;
                    }
                }
            }
        }
    }

    fn print(&self, text: &str, colour: Option<&str>) -> io::Result<()> {
        match colour.filter(|_| self.config.color).and_then(colour_by_name) {
            Some(colour) => self
                .command
                .write_fmt(format_args!("{}\n", colour.paint(text))),
            None => self.say(text),
        }
    }

    fn io_failure(&self, path: &Path, error: io::Error) -> io::Result<()> {
        warn!(path = %path.display(), %error, "file request failed");
        self.report(&Error::from(error))
    }

    /// Sleep in slices so Ctrl-C is noticed.
    fn sleep(&self, duration: Duration) {
        let deadline = Instant::now() + duration;
        while !self.interrupted.load(Ordering::SeqCst) {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep((deadline - now).min(WAIT_SLICE));
        }
    }
}

/// Color names accepted by `print col`. Unknown names render white,
/// `reset` renders plain.
fn colour_by_name(name: &str) -> Option<Colour> {
    match name.to_ascii_lowercase().as_str() {
        "reset" => None,
        "black" => Some(Colour::Black),
        "red" => Some(Colour::Red),
        "green" => Some(Colour::Green),
        "yellow" => Some(Colour::Yellow),
        "blue" => Some(Colour::Blue),
        "magenta" | "purple" => Some(Colour::Purple),
        "cyan" => Some(Colour::Cyan),
        _ => Some(Colour::White),
    }
}

use super::resolve::{resolve_text, resolve_value};
use super::{Listing, Operation, Stack, Var};
use crate::config::Config;
use crate::error;
use crate::lang::ast::*;
use crate::lang::{parse_expression, Error, Line};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, Error>;

/// ## Events for the user interface
///
/// The runtime never touches the terminal or the filesystem. Anything it
/// needs done is handed out through `execute` and the front-end fulfils it.

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Nothing left to run.
    Stopped,
    /// The cycle budget ran out; call `execute` again.
    Running,
    /// One line of output with an optional color name.
    Print(String, Option<String>),
    /// Read a line and hand it to `enter`. `None` asks for the default prompt.
    Input(Option<String>),
    Wait(Duration),
    Save { path: PathBuf, contents: String },
    /// Create the folder with its parents if it does not exist yet.
    CreateDir(PathBuf),
    Shell(String),
    Errors(Vec<Error>),
}

/// State a script reads and writes while it runs.
#[derive(Debug, Default)]
struct Context {
    vars: Var,
    listing: Listing,
    current_chapter: Option<Rc<str>>,
    exit: bool,
    project_dir: Option<PathBuf>,
}

#[derive(Debug)]
enum Frame {
    Chapter {
        /// `None` for a line typed at the prompt.
        name: Option<Rc<str>>,
        lines: Rc<[Line]>,
        pc: usize,
        caller: Option<Rc<str>>,
    },
    Repeat {
        body: Rc<Command>,
        remaining: i64,
    },
}

#[derive(Debug)]
struct InputRequest {
    var: Rc<str>,
    prompt: Option<String>,
    limit: Option<usize>,
}

pub struct Runtime {
    config: Config,
    context: Context,
    frames: Stack<Frame>,
    pending: VecDeque<Event>,
    input: Option<InputRequest>,
    rng: StdRng,
    result: Option<bool>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::with_config(Config::default())
    }
}

impl Runtime {
    pub fn with_config(config: Config) -> Runtime {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Runtime {
            frames: Stack::new("NESTING TOO DEEP", config.max_depth),
            config,
            context: Context::default(),
            pending: VecDeque::new(),
            input: None,
            rng,
            result: None,
        }
    }

    pub fn vars(&self) -> &Var {
        &self.context.vars
    }

    pub fn listing(&self) -> &Listing {
        &self.context.listing
    }

    pub fn current_chapter(&self) -> Option<&str> {
        self.context.current_chapter.as_deref()
    }

    pub fn project_dir(&self) -> Option<&Path> {
        self.context.project_dir.as_deref()
    }

    pub fn exit_requested(&self) -> bool {
        self.context.exit
    }

    /// Names of the active chapters, outermost first.
    pub fn chapter_stack(&self) -> Vec<&str> {
        self.frames
            .iter()
            .filter_map(|frame| match frame {
                Frame::Chapter { name, .. } => name.as_deref(),
                Frame::Repeat { .. } => None,
            })
            .collect()
    }

    /// Whether the outermost chapter of the last run reached its end.
    /// `None` while running or before anything ran.
    pub fn result(&self) -> Option<bool> {
        self.result
    }

    pub fn is_running(&self) -> bool {
        !self.frames.is_empty() || self.input.is_some()
    }

    /// Replace the script. Variables and chapters of the previous one are gone.
    pub fn load(&mut self, text: &str, project_dir: Option<PathBuf>) {
        self.stop();
        self.pending.clear();
        self.context = Context {
            listing: Listing::load(text),
            project_dir,
            ..Context::default()
        };
        self.result = None;
        debug!(
            chapters = self.context.listing.len(),
            project_dir = ?self.context.project_dir,
            "script loaded"
        );
    }

    /// Start the first chapter of the loaded script.
    pub fn run(&mut self) -> Result<()> {
        let first = match self.context.listing.first() {
            Some(chapter) => chapter.name_rc(),
            None => return Err(error!(UndefinedChapter; "SCRIPT HAS NO COMMANDS")),
        };
        self.context.exit = false;
        self.result = None;
        self.run_chapter(&first)
    }

    /// Push a chapter frame. The chapter starts on the next `execute`.
    pub fn run_chapter(&mut self, name: &str) -> Result<()> {
        let chapter = match self.context.listing.get(name) {
            Some(chapter) => chapter,
            None => return Err(error!(UndefinedChapter; name)),
        };
        let name = chapter.name_rc();
        let frame = Frame::Chapter {
            name: Some(name.clone()),
            lines: chapter.lines(),
            pc: 0,
            caller: self.context.current_chapter.clone(),
        };
        self.frames.push(frame)?;
        debug!(chapter = %name, depth = self.frames.len(), "enter chapter");
        self.context.current_chapter = Some(name);
        Ok(())
    }

    /// Feed a line to the runtime.
    ///
    /// Answers a pending `Input` event, otherwise executes the line in direct
    /// mode when nothing is running. Returns true when the line was accepted.
    pub fn enter(&mut self, s: &str) -> bool {
        if let Some(request) = self.input.take() {
            let mut value = s.trim_end_matches(&['\r', '\n'][..]).to_string();
            if let Some(limit) = request.limit.filter(|limit| *limit > 0) {
                if let Some((index, _)) = value.char_indices().nth(limit) {
                    value.truncate(index);
                }
            }
            self.context.vars.store(&request.var, value);
            return true;
        }
        if !self.frames.is_empty() {
            return false;
        }
        let line = Line::new(s);
        if line.is_empty() {
            return false;
        }
        self.context.exit = false;
        self.result = None;
        let frame = Frame::Chapter {
            name: None,
            lines: Rc::from(vec![line]),
            pc: 0,
            caller: self.context.current_chapter.clone(),
        };
        match self.frames.push(frame) {
            Ok(()) => true,
            Err(error) => {
                self.pending.push_back(Event::Errors(vec![error]));
                false
            }
        }
    }

    /// Abort whatever is running with `BREAK`.
    pub fn interrupt(&mut self) {
        if !self.is_running() {
            return;
        }
        let error = match self.innermost_chapter() {
            Some(name) => error!(Break).in_chapter(&name),
            None => error!(Break),
        };
        self.stop();
        self.result = Some(false);
        self.pending.push_back(Event::Errors(vec![error]));
    }

    /// Run up to `cycles` commands, returning early with the first event.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if let Some(event) = self.pending.pop_front() {
                return event;
            }
            if let Some(request) = &self.input {
                return Event::Input(request.prompt.clone());
            }
            if self.frames.is_empty() {
                return Event::Stopped;
            }
            if let Err(error) = self.step() {
                let error = match self.innermost_chapter() {
                    Some(name) if error.chapter().is_none() => error.in_chapter(&name),
                    _ => error,
                };
                debug!(%error, "script aborted");
                self.stop();
                self.result = Some(false);
                self.pending.push_back(Event::Errors(vec![error]));
            }
        }
        match self.pending.pop_front() {
            Some(event) => event,
            None => Event::Running,
        }
    }

    fn stop(&mut self) {
        self.frames.clear();
        self.input = None;
    }

    fn innermost_chapter(&self) -> Option<Rc<str>> {
        self.frames.iter().rev().find_map(|frame| match frame {
            Frame::Chapter { name, .. } => name.clone(),
            Frame::Repeat { .. } => None,
        })
    }

    fn step(&mut self) -> Result<()> {
        let command = match self.frames.last_mut() {
            None => return Ok(()),
            Some(Frame::Chapter { lines, pc, .. }) => match lines.get(*pc) {
                Some(line) => {
                    *pc += 1;
                    line.command()
                }
                None => return self.finish_frame(true),
            },
            Some(Frame::Repeat { body, remaining }) => {
                if *remaining <= 0 {
                    return self.finish_frame(true);
                }
                *remaining -= 1;
                body.clone()
            }
        };
        trace!(?command, "dispatch");
        let proceed = self.dispatch(&command)?;
        if self.context.exit {
            debug!("exit requested");
            self.stop();
            self.result = Some(false);
        } else if !proceed {
            self.finish_frame(false)?;
        }
        Ok(())
    }

    fn finish_frame(&mut self, completed: bool) -> Result<()> {
        if let Frame::Chapter { name, caller, .. } = self.frames.pop()? {
            if let Some(name) = name {
                debug!(chapter = %name, completed, "leave chapter");
                self.context.current_chapter = caller;
            }
            if self.frames.is_empty() {
                self.result = Some(completed);
            }
        }
        Ok(())
    }

    /// Execute one classified command. Returns false when the enclosing
    /// chapter or repetition must stop.
    fn dispatch(&mut self, command: &Command) -> Result<bool> {
        match command {
            Command::Nop => Ok(true),
            Command::Print(printers) => self.r#print(printers),
            Command::Input { var, prompt, limit } => self.r#input(var, prompt, *limit),
            Command::Chapter(name) => {
                self.context.listing.open(name);
                self.context.current_chapter = Some(name.clone());
                Ok(true)
            }
            Command::EndChapter => {
                self.context.current_chapter = None;
                Ok(true)
            }
            Command::Let { var, value } => {
                let value = resolve_value(value, &self.context.vars);
                self.context.vars.store(var, value);
                Ok(true)
            }
            Command::If { var, value, then } => {
                let value = resolve_text(value, &self.context.vars);
                if self.context.vars.fetch(var) == value {
                    self.dispatch(then)
                } else {
                    Ok(true)
                }
            }
            Command::IfPressed { key, command, then } => {
                self.pending.push_back(Event::Print(
                    format!("Assuming key {} was pressed", key),
                    None,
                ));
                self.pending
                    .push_back(Event::Print(format!("Running command: {}", command), None));
                self.dispatch(then)
            }
            Command::IfNotFoundCreate(path) => {
                let path = resolve_text(path, &self.context.vars);
                self.pending.push_back(Event::CreateDir(PathBuf::from(path)));
                Ok(true)
            }
            Command::Calc { expr, var } => {
                let value = self.r#calc(expr);
                self.context.vars.store(var, value);
                Ok(true)
            }
            Command::Rpl { count, body } => self.r#rpl(count, body),
            Command::Wait(seconds) => {
                let duration = self
                    .operand(seconds)
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(|s| Duration::try_from_secs_f64(s).ok());
                if let Some(duration) = duration.filter(|d| !d.is_zero()) {
                    self.pending.push_back(Event::Wait(duration));
                }
                Ok(true)
            }
            Command::Exit => {
                self.context.exit = true;
                Ok(false)
            }
            Command::Random { choices, var } => {
                let value = self.r#random(choices);
                self.context.vars.store(var, value);
                Ok(true)
            }
            Command::Save {
                var,
                location,
                filename,
            } => {
                let filename = resolve_text(filename, &self.context.vars);
                let path = match location {
                    Location::Here => match &self.context.project_dir {
                        Some(dir) => dir.join(&filename),
                        None => PathBuf::from(&filename),
                    },
                    Location::Path(dir) => Path::new(dir).join(&filename),
                };
                let contents = self.context.vars.fetch(var).to_string();
                self.pending.push_back(Event::Save { path, contents });
                Ok(true)
            }
            Command::Con(host_command) => {
                if self.config.allow_host_commands {
                    self.pending.push_back(Event::Shell(host_command.clone()));
                } else {
                    warn!(command = %host_command, "host command refused");
                    self.pending
                        .push_back(Event::Errors(vec![error!(HostDisabled; host_command)]));
                }
                Ok(true)
            }
            Command::Run(name) => {
                if self.context.listing.get(name).is_some() {
                    self.run_chapter(name)?;
                }
                Ok(true)
            }
            Command::TooDeep => Err(error!(OutOfMemory; "NESTING TOO DEEP")),
        }
    }

    fn r#print(&mut self, printers: &[Printer]) -> Result<bool> {
        let mut run = String::new();
        let mut colour: Option<String> = None;
        for printer in printers {
            match printer {
                Printer::Text(text) => {
                    let text = resolve_text(text, &self.context.vars);
                    if !run.is_empty() {
                        run.push(' ');
                    }
                    run.push_str(&text);
                }
                Printer::Newline => {
                    self.flush_print(&mut run, colour.take());
                    self.pending.push_back(Event::Print(String::new(), None));
                }
                Printer::Colour(name) => {
                    self.flush_print(&mut run, colour.clone());
                    colour = Some(name.clone());
                }
            }
        }
        self.flush_print(&mut run, colour);
        Ok(true)
    }

    fn flush_print(&mut self, run: &mut String, colour: Option<String>) {
        if !run.is_empty() {
            self.pending
                .push_back(Event::Print(run.trim().to_string(), colour));
            run.clear();
        }
    }

    fn r#input(
        &mut self,
        var: &Rc<str>,
        prompt: &Option<String>,
        limit: Option<usize>,
    ) -> Result<bool> {
        let prompt = prompt
            .as_ref()
            .map(|p| resolve_text(p, &self.context.vars))
            .filter(|p| !p.is_empty());
        self.input = Some(InputRequest {
            var: var.clone(),
            prompt,
            limit,
        });
        Ok(true)
    }

    fn r#calc(&self, expr: &str) -> String {
        let mut expr = expr.to_string();
        for name in self.context.vars.names_longest_first() {
            let reference = format!("${}", name);
            if expr.contains(&reference) {
                expr = expr.replace(&reference, self.context.vars.fetch(&name));
            }
        }
        match parse_expression(&expr).and_then(|e| Operation::evaluate(&e)) {
            Ok(val) => val.to_string(),
            Err(error) => {
                trace!(%error, %expr, "calc failed");
                "0".to_string()
            }
        }
    }

    fn r#rpl(&mut self, count: &Operand, body: &Rc<Command>) -> Result<bool> {
        let count = match self.operand(count).trim().parse::<i64>() {
            Ok(count) => count,
            Err(_) => return Ok(true),
        };
        if count > 0 {
            self.frames.push(Frame::Repeat {
                body: body.clone(),
                remaining: count,
            })?;
        }
        Ok(true)
    }

    fn r#random(&mut self, choices: &str) -> String {
        if !choices.contains(',') {
            return choices.to_string();
        }
        let items: Vec<&str> = choices.split(',').map(str::trim).collect();
        if let [low, high] = items[..] {
            if let (Ok(low), Ok(high)) = (low.parse::<i64>(), high.parse::<i64>()) {
                if low <= high {
                    return self.rng.gen_range(low..=high).to_string();
                }
            }
        }
        match items.choose(&mut self.rng) {
            Some(item) => item.to_string(),
            None => String::new(),
        }
    }

    /// Text of a count or duration operand; missing variables read as `0`.
    fn operand(&self, operand: &Operand) -> String {
        match operand {
            Operand::Literal(s) => s.clone(),
            Operand::Var(name) => self
                .context
                .vars
                .get(name)
                .unwrap_or("0")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn runtime(script: &str) -> Runtime {
        let mut r = Runtime::with_config(Config::default().with_seed(1));
        r.load(script, Some(PathBuf::from("projects").join("demo")));
        r
    }

    fn drain(r: &mut Runtime) -> Vec<Event> {
        let mut events = vec![];
        loop {
            match r.execute(1000) {
                Event::Stopped => break,
                Event::Running => continue,
                Event::Input(prompt) => {
                    events.push(Event::Input(prompt));
                    break;
                }
                event => events.push(event),
            }
        }
        events
    }

    fn printed(events: &[Event]) -> Vec<String> {
        events
            .iter()
            .filter_map(|e| match e {
                Event::Print(s, _) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_print_runs_and_colours() {
        let mut r = runtime("print {a} nline col red {b c} $missing col");
        r.run().unwrap();
        assert_eq!(
            drain(&mut r),
            vec![
                Event::Print("a".to_string(), None),
                Event::Print("".to_string(), None),
                Event::Print("b c  col".to_string(), Some("red".to_string())),
            ]
        );
    }

    #[test]
    fn test_run_returns_to_caller() {
        let mut r = runtime("chp main\nprint 1\nrun sub\nprint 3\nend chp\nchp sub\nprint 2\n");
        r.run().unwrap();
        assert_eq!(printed(&drain(&mut r)), vec!["1", "2", "3"]);
        assert_eq!(r.result(), Some(true));
        assert_eq!(r.current_chapter(), None);
    }

    #[test]
    fn test_exit_stops_every_chapter() {
        let mut r = runtime("chp main\nrun sub\nprint no\nchp sub\nexit\n");
        r.run().unwrap();
        assert!(printed(&drain(&mut r)).is_empty());
        assert!(r.exit_requested());
        assert_eq!(r.result(), Some(false));
    }

    #[test]
    fn test_self_recursion_hits_depth_limit() {
        let mut r = Runtime::with_config(Config::default().with_max_depth(16));
        r.load("chp a\nrun a\n", None);
        r.run().unwrap();
        let events = drain(&mut r);
        match &events[..] {
            [Event::Errors(errors)] => {
                assert!(errors[0].is(ErrorCode::OutOfMemory));
                assert_eq!(errors[0].to_string(), "OUT OF MEMORY IN a; NESTING TOO DEEP");
            }
            _ => panic!("unexpected events {:?}", events),
        }
        assert!(!r.is_running());
    }

    #[test]
    fn test_input_limit() {
        let mut r = runtime("input $name - {Name?} L3\nprint $name");
        r.run().unwrap();
        assert_eq!(drain(&mut r), vec![Event::Input(Some("Name? L3".to_string()))]);
        assert!(r.enter("Alexander"));
        assert_eq!(printed(&drain(&mut r)), vec!["Ale"]);
    }

    #[test]
    fn test_direct_mode() {
        let mut r = Runtime::default();
        assert!(r.enter("$x = 5"));
        drain(&mut r);
        assert!(r.enter("calc $x * 2 - y"));
        drain(&mut r);
        assert_eq!(r.vars().get("y"), Some("10"));
        assert!(!r.enter("   # nothing"));
    }

    #[test]
    fn test_load_drops_queued_events() {
        let mut r = runtime("if pressed {k} - print {old}");
        r.run().unwrap();
        assert_eq!(
            r.execute(1),
            Event::Print("Assuming key k was pressed".to_string(), None)
        );
        r.load("print {new}", None);
        r.run().unwrap();
        assert_eq!(printed(&drain(&mut r)), vec!["new"]);
    }

    #[test]
    fn test_interrupt() {
        let mut r = runtime("chp spin\nrpl 1000000 print x\n");
        r.run().unwrap();
        assert_eq!(r.execute(10), Event::Print("x".to_string(), None));
        r.interrupt();
        match r.execute(10) {
            Event::Errors(errors) => assert!(errors[0].is(ErrorCode::Break)),
            event => panic!("unexpected {:?}", event),
        }
        assert_eq!(r.execute(10), Event::Stopped);
    }
}

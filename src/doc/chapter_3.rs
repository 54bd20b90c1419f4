/*!
# The Shell

## Starting

```text
zeroshell [OPTIONS] [SCRIPT]
```

With a script name ZeroShell runs that script and exits. Without one it
starts the interactive shell. The `.txt` extension may be left out.

| Option               | Meaning                                        |
|----------------------|------------------------------------------------|
| `--scripts-dir DIR`  | Folder holding scripts, `Scripts` by default   |
| `--max-depth N`      | Active chapters and repeats allowed, 256       |
| `--allow-host`       | Let `con !...` run host commands               |
| `--no-color`         | Print colored text plainly                     |
| `--seed N`           | Repeatable results from `random`               |

Set `ZEROSHELL_LOG=debug` to see diagnostics on stderr, or `trace` to see
every command as it runs.

## Shell commands

| Command          | Action                                              |
|------------------|-----------------------------------------------------|
| `!run <script>`  | Load and run a script                               |
| `!list`          | List scripts with their sizes                       |
| `!new <name>`    | Create a script from a template, never overwriting  |
| `!edit <name>`   | Show a script so you can change it in an editor     |
| `!dir`           | Show the scripts folder and how many projects exist |
| `!clear`         | Clear the screen                                    |
| `!help`          | Show the command list                               |
| `!exit`          | Leave ZeroShell                                     |

Anything else runs as a ZeroBasics command in direct mode. Variables set in
direct mode stay until the next script is loaded.

## Projects

Every script has a project folder `Scripts/projects/<name>` which is
created when the script loads. `save ... in here` writes into it.

*/

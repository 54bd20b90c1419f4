/*!
# `CON !<host command>`

## Purpose
Run a command of the operating system.

## Remarks
Everything after `!` goes to the system shell. Host commands are disabled
unless ZeroShell was started with `--allow-host`; otherwise the command
reports `HOST COMMANDS DISABLED` and the script goes on.

## Example
```text
CON !ls -l
```

*/

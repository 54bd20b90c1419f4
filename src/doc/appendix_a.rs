/*!
# Errors

Most mistakes in a script are quiet: a command with the wrong shape does
nothing, `calc` stores `0` when it cannot compute, and a failed file
request reports an error but lets the script go on. The errors below stop
the script unless noted.

| Code | Error                    | Cause                                        |
|------|--------------------------|----------------------------------------------|
| 1    | `BREAK`                  | CTRL-C while a script runs                   |
| 7    | `OUT OF MEMORY`          | Chapters or repeats nested too deeply        |
| 8    | `UNDEFINED CHAPTER`      | A script without any command                 |
| 53   | `FILE NOT FOUND`         | Missing script; the script goes on for files |
| 57   | `DISK I/O ERROR`         | Writing a file failed; the script goes on    |
| 58   | `FILE ALREADY EXISTS`    | `!new` with a name that is taken             |
| 64   | `BAD FILE NAME`          | A shell command without a name               |
| 70   | `HOST COMMANDS DISABLED` | `con` without `--allow-host`; not fatal      |

An error names the chapter it happened in.

```text
OUT OF MEMORY IN loop; NESTING TOO DEEP
```

*/

/*!
# Limits and Internals

Every line is classified once when the script loads. The result is a
small tree: `if` and `rpl` carry the command they guard. Only the text is
resolved again each time the line runs, because it depends on variables.

The runtime does not call itself to run `rpl` and `run`. It keeps a stack
of frames, one per active chapter or repeat, and steps the top frame one
command at a time. The stack holds 256 frames unless `--max-depth` says
otherwise. A chapter that runs itself fills the stack and stops with
`OUT OF MEMORY; NESTING TOO DEEP` instead of running forever.

A single line may nest `if` and `rpl` commands 32 levels deep. `calc`
accepts 128 levels of signs and parentheses.

The runtime never prints or touches files itself. It hands out events:
print a line, ask for input, wait, save a file, create a folder or run a
host command. The shell fulfils them, which is how the test suite runs
scripts without a terminal.

*/

/*!
# `PRINT [NLINE] [COL <color>] <text>...`

## Purpose
Output text to the terminal.

## Remarks
The text words are resolved and joined with single spaces into one line.
`NLINE` ends the line built so far and prints an empty line. `COL <color>`
ends the line built so far and prints the following words in a color:
black, red, green, yellow, blue, magenta, cyan or white. Unknown colors
print white, `reset` prints plainly. A final `COL` without a color name is
printed as a word.

## Example
```text
PRINT {Hello,} $name{!}
PRINT NLINE COL green {All good}
Hello, Ada!

All good
```

*/

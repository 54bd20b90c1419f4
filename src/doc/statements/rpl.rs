/*!
# `RPL <count> <command>`

## Purpose
Repeat a command.

## Remarks
The count is a whole number or a variable. A count that is not a number
does nothing. Repeating stops early when the command ends the chapter,
for example with `EXIT`.

## Example
```text
RPL 3 PRINT {x}
x
x
x
```

*/

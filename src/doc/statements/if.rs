/*!
# `IF $<variable> = <text> - <command>`
Also `IF PRESSED {key} - <command>` and `IF NOT FOUND CREATE <folder>`.

## Purpose
Do something contingent on the value of a variable.

## Remarks
The text between `=` and the first `-` is resolved and compared with the
variable; the command after `-` runs when they are equal. The `-` must
come after the text.

`IF PRESSED` cannot wait for a key. It reports that the key is assumed
pressed, echoes the command and runs it.

`IF NOT FOUND CREATE` creates a folder with its parents when it does not
exist yet.

## Example
```text
$choice = y
IF $choice = {y} - PRINT {yes}
IF $choice = {n} - PRINT {no}
yes
IF NOT FOUND CREATE {backup}
Created folder: backup
```

*/

/*!
# `INPUT $<variable> [- <prompt>]`

## Purpose
Read a line from the operator into a variable.

## Remarks
The prompt is every word after the first `-`; further `-` words are
dropped. A prompt word `L<digits>` limits how many characters are kept,
`L0` keeps everything. The limit word is shown as part of the prompt.
Without a prompt the shell asks with `Input:`.

## Example
```text
INPUT $name - {Your name?} L8
Your name? L8 Bartholomew
PRINT $name
Bartholo
```

*/

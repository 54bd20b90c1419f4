/*!
# `$<variable> = <text>`

## Purpose
Store text in a variable.

## Remarks
The left side must start with `$`; `x = 5` does nothing. The words on the
right are joined with single spaces and variables in them are replaced.
Braces are kept as written.

## Example
```text
$x = 5
$y = $x and {more}
PRINT $y
5 and {more}
```

*/

/*!
# `RANDOM <choices> - <variable>`

## Purpose
Pick something at random.

## Remarks
Two whole numbers `a,b` with `a` not above `b` pick a number from `a` to
`b` inclusive. Any other comma list picks one of its items. Without a
comma the text itself is stored. Start the shell with `--seed` to repeat
the same picks.

## Example
```text
RANDOM 1,6 - roll
RANDOM red,green,blue - colour
```

*/

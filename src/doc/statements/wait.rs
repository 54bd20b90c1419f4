/*!
# `WAIT <seconds>`

## Purpose
Pause the script.

## Remarks
Seconds may be a decimal or a variable. Negative or unreadable values do
not wait. CTRL-C ends the wait and the script.

## Example
```text
WAIT 0.5
```

*/

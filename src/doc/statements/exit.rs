/*!
# `EXIT`

## Purpose
Stop the script.

## Remarks
Every running chapter stops, including the callers of the current one.

## Example
```text
IF $answer = {q} - EXIT
```

*/

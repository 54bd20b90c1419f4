/*!
# `CHP <name>` and `END CHP`

## Purpose
Delimit chapters.

## Remarks
While a script loads these lines split it into chapters. Executed as a
command, `CHP` empties the chapter of that name, creating it when needed,
and makes it the current chapter. `END CHP` only clears the current
chapter. A chapter that is running keeps its lines even when emptied.

## Example
```text
chp main
print {in main}
end chp
```

*/

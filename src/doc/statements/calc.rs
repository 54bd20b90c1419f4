/*!
# `CALC <expression> - <variable>`

## Purpose
Do arithmetic.

## Remarks
Variables in the expression are replaced by their values, then the
expression is computed with `+`, `-`, `*`, `/`, signs and parentheses.
Whole numbers stay whole. Division always gives a decimal. Anything that
cannot be computed, division by zero included, stores `0`.

## Example
```text
$a = 3
CALC ($a + 4) * 2 - r
PRINT $r
14
CALC 4 / 2 - r
PRINT $r
2.0
```

*/

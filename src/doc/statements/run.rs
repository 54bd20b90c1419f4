/*!
# `RUN <chapter>`

## Purpose
Run another chapter.

## Remarks
The chapter runs to its end and the caller continues with its next line.
Running an unknown chapter does nothing. A chapter that stops early does
not stop its caller; only `EXIT` does.

## Example
```text
chp main
print {one}
run two
print {three}
end chp
chp two
print {two}
end chp
```

*/

/*!
# Scripts, Chapters and Text

A script is a UTF-8 text file. Every line holds one command. Blank lines
are ignored and a `#` starts a comment that runs to the end of the line.
The comment is found before anything else happens, so a `#` inside braces
also ends the line.

## Chapters

```text
chp greet
print {Hello}
end chp
```

`chp <name>` opens a chapter and `end chp` closes it. Both keywords are
case-insensitive while the name keeps its case. Lines written before the
first `chp` belong to a chapter called `main`. A line found after `end chp`
without a new header joins the chapter created last. Opening a chapter a
second time throws away what it held so far.

Running a script runs the first chapter only. The command `run <name>`
runs another chapter and then continues with the next line of the caller.

## Variables

Variables are named with letters, digits and underscores and always hold
text. Write `$name` to use one; a variable that was never set reads as
empty text. Loading a script forgets every variable.

```text
$greeting = Hello
$both = $greeting World
```

## Text

Commands split their line at spaces. A span in braces stays together even
when it contains spaces and its braces are removed when the text is used.
Inside and outside braces `$name` is replaced by the variable's value.

| Written          | Printed when `x` is `1`     |
|------------------|-----------------------------|
| `{a $x b}`       | `a 1 b`                     |
| `{Hello, }$x{!}` | `Hello, 1!`                 |
| `{a {b} c}`      | `a b c`                     |
| `x{a {b}}`       | `xa {b}`                    |
| `{oops`          | `{oops`                     |
| `50$`            | `50$`                       |

Assignment is the exception: `$v = {a b}` stores the braces as written and
only replaces variables.

*/

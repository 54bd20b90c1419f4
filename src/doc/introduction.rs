/*!
# Introductory Tutorial for ZeroShell

Begin by opening a terminal and running `zeroshell` without arguments. The
first start creates a `Scripts` folder holding a sample script called
`test.txt`, and a `Scripts/projects` folder for files your scripts write.
If you get the following, you are ready for this tutorial. Type `!exit` or
CTRL-D to leave.
<pre><code>&nbsp;  ============================================================
&nbsp;  ZeroShell 0.10 - ZeroBasics interpreter
&nbsp;  ============================================================
&nbsp;  Type !help for help
&nbsp;  ------------------------------------------------------------
&nbsp;  ZB[1 scripts]> █
</code></pre>

 Stop a running script with CTRL-C.

Any line that does not start with `!` is a ZeroBasics command and runs
immediately. This is called direct mode. Try printing something. Lines
you type are marked with a "`>`".

<pre><code>&nbsp;> print {Hello World}
&nbsp;  Hello World
</code></pre>

Words in braces are literal text and may contain spaces. Variables are
written with a leading `$` and hold text.

<pre><code>&nbsp;> $name = Ada
&nbsp;> print {Hello,} $name{!}
&nbsp;  Hello, Ada!
</code></pre>

Direct mode is fine for experiments, but real programs live in script
files. A script is a plain text file in the `Scripts` folder. Create one
from a template and look at it.

<pre><code>&nbsp;> !new hello
&nbsp;  Created new script: hello
&nbsp;  Path: Scripts/hello.txt
&nbsp;> !edit hello
</code></pre>

Open the file in any text editor, change it, then run it.

<pre><code>&nbsp;> !run hello
</code></pre>

Scripts are divided into chapters. Running a script runs its first
chapter; other chapters run when a command asks for them with `run`.

```text
chp main
$n = 0
print {Let's count.}
rpl 3 run tick
print {Done.}
end chp

chp tick
calc $n + 1 - n
print {Tick } $n
end chp
```

The remaining chapters of this documentation describe the script format,
every command, the shell, and the errors you may see.

*/

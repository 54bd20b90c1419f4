/*!
# `SAVE $<variable> in <folder> - <filename>`

## Purpose
Write a variable to a file.

## Remarks
The word `in` must be written in lower case. `HERE` as the folder, in any
case, means the project folder of the script. Folders are
created as needed and an existing file is replaced. The file name is
resolved like printed text.

## Example
```text
$content = abc
SAVE $content in here - {out.txt}
Saved: Scripts/projects/demo/out.txt
```

*/

use super::Column;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    chapter: Option<String>,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            chapter: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn chapter(&self) -> Option<&str> {
        self.chapter.as_deref()
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn in_chapter(mut self, chapter: &str) -> Error {
        debug_assert!(self.chapter.is_none());
        self.chapter = Some(chapter.to_string());
        self
    }

    pub fn in_column(mut self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        self.column = column.clone();
        self
    }

    pub fn message(mut self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        self.message = message.to_string();
        self
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        let msg = error.to_string();
        match error.kind() {
            std::io::ErrorKind::NotFound => Error::new(ErrorCode::FileNotFound).message(&msg),
            std::io::ErrorKind::UnexpectedEof => Error::new(ErrorCode::InputPastEnd),
            _ => Error::new(ErrorCode::DiskIoError).message(&msg),
        }
    }
}

pub enum ErrorCode {
    Break = 1,
    SyntaxError = 2,
    OutOfMemory = 7,
    UndefinedChapter = 8,
    DivisionByZero = 11,
    InternalError = 51,
    FileNotFound = 53,
    DiskIoError = 57,
    FileAlreadyExists = 58,
    InputPastEnd = 62,
    BadFileName = 64,
    HostDisabled = 70,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "BREAK",
            2 => "SYNTAX ERROR",
            7 => "OUT OF MEMORY",
            8 => "UNDEFINED CHAPTER",
            11 => "DIVISION BY ZERO",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            57 => "DISK I/O ERROR",
            58 => "FILE ALREADY EXISTS",
            62 => "INPUT PAST END",
            64 => "BAD FILE NAME",
            70 => "HOST COMMANDS DISABLED",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(chapter) = &self.chapter {
            suffix.push_str(&format!(" {}", chapter));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        let message = if self.message.is_empty() {
            String::new()
        } else {
            format!("; {}", self.message)
        };
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}{}", self.code, message)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}{}", self.code, suffix, message)
            }
        } else if suffix.is_empty() {
            write!(f, "{}{}", code_str, message)
        } else {
            write!(f, "{} IN{}{}", code_str, suffix, message)
        }
    }
}

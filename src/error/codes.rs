/// Process exit codes. clap reports usage errors with 2 on its own.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    GeneralError = 1,
    PermissionError = 3,
    ScanError = 4,
    RenameError = 5,
    DestinationExists = 6,
    IdRangeError = 7,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

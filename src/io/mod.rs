//! Destinations for the iteration trace.
//!

use std::fs::File;
use std::io::{sink, stdout, Error, ErrorKind, Result, Sink, Stdout, Write};

/// Where trace output goes
pub(crate) enum PrintTarget {
    Stdout(Stdout),
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
    Sink(Sink),
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PrintTarget::Stdout(_) => "Stdout",
            PrintTarget::File(_) => "File",
            PrintTarget::Buffer(_) => "Buffer",
            PrintTarget::Stream(_) => "Stream",
            PrintTarget::Sink(_) => "Sink",
        };
        write!(f, "PrintTarget::{name}")
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(stdout())
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match self {
            PrintTarget::Stdout(stdout) => stdout.write(buf),
            PrintTarget::File(file) => file.write(buf),
            PrintTarget::Buffer(buffer) => {
                buffer.extend_from_slice(buf);
                Ok(buf.len())
            }
            PrintTarget::Stream(stream) => stream.write(buf),
            PrintTarget::Sink(sink) => sink.write(buf),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            PrintTarget::Stdout(stdout) => stdout.flush(),
            PrintTarget::File(file) => file.flush(),
            PrintTarget::Stream(stream) => stream.flush(),
            PrintTarget::Buffer(_) | PrintTarget::Sink(_) => Ok(()),
        }
    }
}

/// Trait implemented by solvers that allow configurable print targets
pub trait ConfigurablePrintTarget {
    /// redirect print output to stdout
    fn print_to_stdout(&mut self);
    /// redirect print output to a file
    fn print_to_file(&mut self, file: File);
    /// redirect print output to a stream
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// redirect print output to an internal buffer
    fn print_to_buffer(&mut self);
    /// discard all print output
    fn print_to_sink(&mut self);
    /// get the contents of the internal print buffer
    fn get_print_buffer(&mut self) -> Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::Stdout(stdout());
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink(sink());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        match self {
            PrintTarget::Buffer(buffer) => Ok(String::from_utf8_lossy(buffer).to_string()),
            _ => Err(Error::new(
                ErrorKind::Other,
                "Print buffering is not configured.",
            )),
        }
    }
}

// forwards the trait to a `print_target` field, for use on solver types.
// generic solvers list their parameters in brackets first
macro_rules! forward_print_target {
    ([$($gen:tt)*] $solver:ty) => {
        impl<$($gen)*> $crate::io::ConfigurablePrintTarget for $solver {
            fn print_to_stdout(&mut self) {
                $crate::io::ConfigurablePrintTarget::print_to_stdout(&mut self.print_target)
            }
            fn print_to_file(&mut self, file: std::fs::File) {
                $crate::io::ConfigurablePrintTarget::print_to_file(&mut self.print_target, file)
            }
            fn print_to_stream(&mut self, stream: Box<dyn std::io::Write + Send + Sync>) {
                $crate::io::ConfigurablePrintTarget::print_to_stream(&mut self.print_target, stream)
            }
            fn print_to_buffer(&mut self) {
                $crate::io::ConfigurablePrintTarget::print_to_buffer(&mut self.print_target)
            }
            fn print_to_sink(&mut self) {
                $crate::io::ConfigurablePrintTarget::print_to_sink(&mut self.print_target)
            }
            fn get_print_buffer(&mut self) -> std::io::Result<String> {
                $crate::io::ConfigurablePrintTarget::get_print_buffer(&mut self.print_target)
            }
        }
    };
    ($solver:ty) => {
        $crate::io::forward_print_target!([] $solver);
    };
}
pub(crate) use forward_print_target;

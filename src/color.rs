extern crate termcolor;

use termcolor::{Color, ColorSpec, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

pub fn set_fg<W: WriteColor>(dest: &mut W, color: Color) {
    dest.set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true))
        .expect("Error: can't set output color");
}
pub fn reset_fg<W: WriteColor>(dest: &mut W) {
    dest.reset().expect("Error: can't reset color");
}

macro_rules! write_color {
    ($dest:expr, $color:expr, $typ:expr, $($arg:tt)*) => {{
        $crate::color::set_fg($dest, $color);
        write!($dest, "{:>8}: ", $typ);
        $crate::color::reset_fg($dest);
        writeln!($dest, $($arg)*).expect("Failed to write status");
    }};
}

macro_rules! write_error {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Red, $typ, $($arg)*)
    };
}

macro_rules! write_warn {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Yellow, $typ, $($arg)*)
    };
}

macro_rules! write_info {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Blue, $typ, $($arg)*)
    };
}

macro_rules! write_ok {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Green, $typ, $($arg)*)
    };
}

//! Command-line front end: decode one BMP, write the grayscale and
//! two-tone derivations.
//!
//! Exit codes: 0 success, 1 input I/O error, 2 format error, 3 output
//! I/O error, 4 resource limit error.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, Command};
use log::{error, info};

use bmptone::{transform, BmpError, BmpImage, DerivedImage, IoError};

const EXIT_INPUT_IO: u8 = 1;
const EXIT_FORMAT: u8 = 2;
const EXIT_OUTPUT_IO: u8 = 3;
const EXIT_RESOURCE: u8 = 4;

fn create_cmd_args() -> Command {
    Command::new("bmptone")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Derive grayscale and two-tone BMPs from an uncompressed 24/32-bit BMP")
        .arg(
            Arg::new("in")
                .short('i')
                .long("input")
                .help("Source BMP file")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("gray")
                .short('g')
                .long("gray")
                .help("Destination for the grayscale output")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("binary")
                .short('b')
                .long("binary")
                .help("Destination for the two-tone output")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("print-header")
                .long("print-header")
                .help("Dump the decoded header fields to stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> ExitCode {
    let options = create_cmd_args().get_matches();

    let level = if options.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = simple_logger::SimpleLogger::new().with_level(level).init();

    let input = options.get_one::<PathBuf>("in").unwrap();
    let gray_path = options.get_one::<PathBuf>("gray").unwrap();
    let binary_path = options.get_one::<PathBuf>("binary").unwrap();

    let data = match bmptone::io::read_file(input) {
        Ok(data) => data,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(EXIT_INPUT_IO);
        }
    };

    // A decode failure aborts the whole run; neither output is attempted.
    let image = match bmptone::decode(&data) {
        Ok(image) => image,
        Err(e) => {
            error!("cannot decode {}: {e}", input.display());
            return ExitCode::from(exit_code_for(&e));
        }
    };

    if options.get_flag("print-header") {
        print_headers(&image);
    }

    // The two outputs are independent: a failure on one does not stop
    // the other. The process reports the first failing stage's code.
    let gray_code = write_output("grayscale", transform::grayscale(&image), gray_path);
    let binary_code = write_output("binarization", transform::binarize(&image), binary_path);

    if gray_code != 0 {
        ExitCode::from(gray_code)
    } else {
        ExitCode::from(binary_code)
    }
}

fn write_output(label: &str, derived: Result<DerivedImage, BmpError>, dest: &Path) -> u8 {
    let derived = match derived {
        Ok(derived) => derived,
        Err(e) => {
            error!("{label} transform failed: {e}");
            return exit_code_for(&e);
        }
    };
    let bytes = derived.encode();
    match bmptone::io::write_atomic(dest, &bytes) {
        Ok(()) => {
            info!("{label}: wrote {} ({} bytes)", dest.display(), bytes.len());
            0
        }
        Err(e) => {
            error!("{label} output failed: {e}");
            EXIT_OUTPUT_IO
        }
    }
}

fn exit_code_for(err: &BmpError) -> u8 {
    match err {
        BmpError::Io(IoError::WriteFailed { .. }) => EXIT_OUTPUT_IO,
        BmpError::Io(_) => EXIT_INPUT_IO,
        BmpError::Resource(_) => EXIT_RESOURCE,
        _ => EXIT_FORMAT,
    }
}

fn print_headers(image: &BmpImage) {
    let fh = &image.file_header;
    let ih = &image.info_header;
    println!("------------- bmp file header -------------");
    println!("signature         = {:#06x}", fh.signature);
    println!("file size         = {}", fh.file_size);
    println!("reserved          = {} {}", fh.reserved1, fh.reserved2);
    println!("pixel data offset = {}", fh.pixel_data_offset);
    println!("------------- bmp info header -------------");
    println!("header size       = {}", ih.header_size);
    println!("width             = {}", ih.width);
    println!("height            = {}", ih.height);
    println!("planes            = {}", ih.planes);
    println!("bit count         = {}", ih.bit_count);
    println!("compression       = {}", ih.compression);
    println!("image size        = {}", ih.image_size);
    println!("resolution        = {} x {}", ih.x_pels_per_meter, ih.y_pels_per_meter);
    println!("colors used       = {}", ih.colors_used);
    println!("colors important  = {}", ih.colors_important);
    println!("-------------------------------------------");
    println!(
        "row stride        = {} (image size / height = {} / {})",
        image.stride(),
        ih.image_size,
        ih.height
    );
}

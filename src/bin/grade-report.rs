use std::env;
use std::fs;
use std::process;

use grading_tools::plan::lookup_submission;
use grading_tools::reference::ReferenceCheck;
use grading_tools::report::{assemble_report, diff_student_image};
use grading_tools::types::ReportConfig;

fn print_help(program_name: &str) {
    println!("Usage: {} [OPTIONS] <submission-key>", program_name);
    println!();
    println!("Generate a LaTeX comparison report for a graded submission");
    println!();
    println!("OPTIONS:");
    println!("  -o, --output FILE     Output filename [default: report.tex]");
    println!("  --placeholder FILE    Image shown for missing student renders [default: owl.png]");
    println!("  -h, --help            Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("  {} submission3", program_name);
    println!("  {} -o task5.tex submission5", program_name);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program_name = &args[0];

    if args.len() < 2 {
        print_help(program_name);
        process::exit(1);
    }

    let mut config = ReportConfig::default();
    let mut submission = String::new();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(program_name);
                return;
            }
            "-o" | "--output" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --output requires a filename");
                    process::exit(1);
                }
                config.output_filename = args[i + 1].clone();
                i += 2;
            }
            "--placeholder" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --placeholder requires a filename");
                    process::exit(1);
                }
                config.placeholder_image = args[i + 1].clone();
                i += 2;
            }
            _ => {
                if args[i].starts_with('-') {
                    eprintln!("Error: Unknown option {}", args[i]);
                    process::exit(1);
                }
                submission = args[i].clone();
                i += 1;
            }
        }
    }

    if submission.is_empty() {
        eprintln!("Error: No submission key provided");
        print_help(program_name);
        process::exit(1);
    }

    let Some(task) = lookup_submission(&submission) else {
        eprintln!("Error: Unknown submission key {}", submission);
        process::exit(1);
    };

    let check = ReferenceCheck::detect(&config);
    println!("Using Vulkan: {}", check.vulkan);
    println!("Using OpenGL: {}", check.opengl);

    let prefix = check.prefix();
    let document = match assemble_report(&task, prefix, &config.placeholder_image, |filename| {
        diff_student_image(filename, prefix.unwrap_or(""))
    }) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = fs::write(&config.output_filename, document) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    println!("Report written to {}", config.output_filename);
}

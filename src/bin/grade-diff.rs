use std::env;
use std::process;

use grading_tools::diff::absolute_difference;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 4 {
        print_help();
        process::exit(1);
    }

    let input1 = add_png_extension(&args[1]);
    let input2 = add_png_extension(&args[2]);
    let output = add_png_extension(&args[3]);

    if let Err(e) = create_diff(&input1, &input2, &output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    println!("Diff created: {} vs {} -> {}", input1, input2, output);
}

fn print_help() {
    println!("grade-diff - Compare two PNG renders and write their absolute difference");
    println!();
    println!("Usage: grade-diff <input1.png> <input2.png> <output.png>");
    println!();
    println!("Each output pixel is the per-channel absolute difference of the inputs;");
    println!("identical renders produce an all-black image.");
}

fn add_png_extension(filename: &str) -> String {
    if filename.ends_with(".png") {
        filename.to_string()
    } else {
        format!("{}.png", filename)
    }
}

fn create_diff(input1: &str, input2: &str, output: &str) -> Result<(), Box<dyn std::error::Error>> {
    let img1 = image::open(input1)?.to_rgb8();
    let img2 = image::open(input2)?.to_rgb8();

    let diff = absolute_difference(&img1, &img2)?;
    diff.save(output)?;
    Ok(())
}

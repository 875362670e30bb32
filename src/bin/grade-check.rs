use std::env;
use std::path::Path;
use std::process;

use serde::Serialize;

use grading_tools::plan::{camera_poses, image_filename, lookup_submission, view_plan};
use grading_tools::reference::ReferenceCheck;
use grading_tools::types::ReportConfig;

#[derive(Debug, Serialize)]
struct SubmissionAnalysis {
    submission: String,
    task: u8,
    task_name: &'static str,
    backend: BackendCheck,
    missing_student_files: usize,
    missing_reference_files: usize,
    files: Vec<FileCheck>,
}

#[derive(Debug, Serialize)]
struct BackendCheck {
    vulkan_marker_present: bool,
    opengl_marker_present: bool,
    reference_prefix: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct FileCheck {
    filename: String,
    view: &'static str,
    pose: &'static str,
    student_present: bool,
    reference_present: bool,
    student_dimensions: Option<(u32, u32)>,
    reference_dimensions: Option<(u32, u32)>,
    dimensions_match: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: {} <submission-key>", args[0]);
        eprintln!();
        eprintln!("List the renders expected for a submission and report which student");
        eprintln!("and reference files are present, as JSON.");
        process::exit(1);
    }

    let Some(task) = lookup_submission(&args[1]) else {
        eprintln!("Error: Unknown submission key {}", args[1]);
        process::exit(1);
    };

    let config = ReportConfig::default();
    let backend = ReferenceCheck::detect(&config);
    let prefix = backend.prefix();

    let mut files = Vec::new();
    for view in view_plan(task.number) {
        for &pose in camera_poses(task.number) {
            let filename = image_filename(&view, pose);
            let reference_name = format!("{}{}", prefix.unwrap_or(""), filename);

            let student_dimensions = probe_dimensions(&filename);
            let reference_dimensions = probe_dimensions(&reference_name);

            files.push(FileCheck {
                view: view.title,
                pose,
                student_present: Path::new(&filename).is_file(),
                reference_present: Path::new(&reference_name).is_file(),
                dimensions_match: match (student_dimensions, reference_dimensions) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                },
                student_dimensions,
                reference_dimensions,
                filename,
            });
        }
    }

    let analysis = SubmissionAnalysis {
        submission: args[1].clone(),
        task: task.number,
        task_name: task.name,
        backend: BackendCheck {
            vulkan_marker_present: backend.vulkan,
            opengl_marker_present: backend.opengl,
            reference_prefix: prefix,
        },
        missing_student_files: files.iter().filter(|f| !f.student_present).count(),
        missing_reference_files: files.iter().filter(|f| !f.reference_present).count(),
        files,
    };

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

fn probe_dimensions(path: &str) -> Option<(u32, u32)> {
    image::image_dimensions(path).ok()
}

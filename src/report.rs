use crate::diff;
use crate::plan::{camera_poses, image_filename, view_plan};
use crate::types::Task;
use std::error::Error;
use std::fmt::Write as _;
use std::path::Path;

pub const INTRO_SENTENCE: &str =
    "Side-by-side comparisons: left = your solution, middle = reference image, right = absolute difference.";

pub const BACKEND_WARNING: &str =
    "We could not decide whether you are taking the OpenGL or Vulkan route. Please stick to the original folder names.";

pub const MISSING_FILE_ERROR: &str = "Error: Some of the necessary files do not exist.";

/// Outcome of the per-file step for one expected student render.
pub enum ImageStatus {
    Ready,
    MissingStudent,
}

/// Append-only LaTeX buffer. Nothing touches disk until the caller writes the
/// finished document.
pub struct ReportBuilder {
    buf: String,
}

impl ReportBuilder {
    pub fn new(task: &Task) -> Self {
        let mut buf = String::new();
        buf.push_str("\\documentclass{article}\n");
        buf.push_str("\\usepackage{graphicx}\n");
        buf.push_str("\\usepackage{subcaption}\n");
        buf.push_str("\\usepackage[a4paper, margin=1in]{geometry}\n");
        let _ = writeln!(&mut buf, "\\title{{{} Report}}", task.name);
        buf.push_str("\\begin{document}\n");
        buf.push_str("\\maketitle\n");
        buf.push_str("\\section{Results}\n");
        buf.push_str(INTRO_SENTENCE);
        buf.push('\n');
        Self { buf }
    }

    pub fn warn_unknown_backend(&mut self) {
        self.buf.push_str(BACKEND_WARNING);
        self.buf.push('\n');
    }

    pub fn begin_view(&mut self, title: &str) {
        let _ = writeln!(&mut self.buf, "\\subsection{{{}}}", title);
    }

    /// Three-image row: student render, reference render, difference image.
    pub fn figure(&mut self, filename: &str, ref_prefix: &str) {
        self.figure_row(filename, ref_prefix, filename);
    }

    /// Degraded row for a missing student render: the error sentence, then the
    /// placeholder image in the student slot.
    pub fn missing_student_figure(&mut self, filename: &str, ref_prefix: &str, placeholder: &str) {
        self.buf.push_str(MISSING_FILE_ERROR);
        self.buf.push('\n');
        self.figure_row(placeholder, ref_prefix, filename);
    }

    fn figure_row(&mut self, student_slot: &str, ref_prefix: &str, filename: &str) {
        self.buf.push_str("\\begin{figure}[h!]\n");
        self.buf.push_str("\\centering\n");
        let _ = writeln!(
            &mut self.buf,
            "\\includegraphics[width=0.3\\textwidth]{{{}}}",
            student_slot
        );
        let _ = writeln!(
            &mut self.buf,
            "\\includegraphics[width=0.3\\textwidth]{{{}{}}}",
            ref_prefix, filename
        );
        let _ = writeln!(
            &mut self.buf,
            "\\includegraphics[width=0.3\\textwidth]{{diff_{}}}",
            filename
        );
        self.buf.push_str("\\end{figure}\n");
    }

    pub fn end_view(&mut self) {
        self.buf.push_str("\\newpage\n");
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("\\newpage\n");
        self.buf.push_str("\\end{document}\n");
        self.buf
    }
}

/// Assemble the full document for a task: one subsection per applicable view
/// category, one figure block per camera pose. `process_image` performs the
/// per-file work (existence check, difference image) for each expected
/// filename; its error aborts the whole assembly.
pub fn assemble_report<F>(
    task: &Task,
    ref_prefix: Option<&str>,
    placeholder: &str,
    mut process_image: F,
) -> Result<String, Box<dyn Error>>
where
    F: FnMut(&str) -> Result<ImageStatus, Box<dyn Error>>,
{
    let prefix = ref_prefix.unwrap_or("");

    let mut doc = ReportBuilder::new(task);
    if ref_prefix.is_none() {
        doc.warn_unknown_backend();
    }

    for view in view_plan(task.number) {
        doc.begin_view(view.title);
        for pose in camera_poses(task.number) {
            let filename = image_filename(&view, pose);
            match process_image(&filename)? {
                ImageStatus::Ready => doc.figure(&filename, prefix),
                ImageStatus::MissingStudent => {
                    doc.missing_student_figure(&filename, prefix, placeholder)
                }
            }
        }
        doc.end_view();
    }

    Ok(doc.finish())
}

/// Per-file step used by `grade-report`. A missing student render degrades to
/// the placeholder figure; everything else is diffed against the reference,
/// and a missing or mismatched reference image is fatal.
pub fn diff_student_image(filename: &str, ref_prefix: &str) -> Result<ImageStatus, Box<dyn Error>> {
    if !Path::new(filename).is_file() {
        return Ok(ImageStatus::MissingStudent);
    }

    diff::write_diff(filename, ref_prefix)?;
    Ok(ImageStatus::Ready)
}

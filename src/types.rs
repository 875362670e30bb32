#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Task {
    pub number: u8,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ViewCategory {
    pub title: &'static str,
    pub prefix: &'static str,
}

pub struct ReportConfig {
    pub output_filename: String,
    pub placeholder_image: String,
    pub vulkan_marker: String,
    pub opengl_marker: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_filename: "report.tex".to_string(),
            placeholder_image: "owl.png".to_string(),
            vulkan_marker: "../_project/GCGProject_VK".to_string(),
            opengl_marker: "../_project/GCGProject_GL".to_string(),
        }
    }
}

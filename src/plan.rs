use crate::types::{Task, ViewCategory};

const TASKS: [Task; 6] = [
    Task { number: 1, name: "Task 1" },
    Task { number: 2, name: "Task 2" },
    Task { number: 3, name: "Task 3" },
    Task { number: 4, name: "Task 4" },
    Task { number: 5, name: "Task 5" },
    Task { number: 6, name: "Task 6" },
];

/// Resolve a submission key from the command line to its task.
pub fn lookup_submission(key: &str) -> Option<Task> {
    match key {
        "submission1" => Some(TASKS[0]),
        "submission2" => Some(TASKS[1]),
        "submission3" => Some(TASKS[2]),
        "submission4" => Some(TASKS[3]),
        "submission5" => Some(TASKS[4]),
        "submission6" => Some(TASKS[5]),
        _ => None,
    }
}

const FRONT_ONLY: [&str; 1] = ["front"];

const ALL_POSES: [&str; 14] = [
    "front", "front_right", "right", "front_left", "left", "front_up", "up",
    "front_down", "down", "right_up", "right_down", "left_up", "left_down", "back",
];

/// Camera poses rendered for a task. Task 1 is graded on the front view only.
pub fn camera_poses(task: u8) -> &'static [&'static str] {
    if task == 1 { &FRONT_ONLY } else { &ALL_POSES }
}

struct PlanEntry {
    view: ViewCategory,
    tasks: &'static [u8],
}

// Section order in the report follows table order.
const VIEW_PLAN: [PlanEntry; 8] = [
    PlanEntry {
        view: ViewCategory { title: "Standard View", prefix: "standard" },
        tasks: &[1, 2, 3, 4, 5, 6],
    },
    PlanEntry {
        view: ViewCategory { title: "Backface Culling View", prefix: "culling" },
        tasks: &[3, 4, 5, 6],
    },
    PlanEntry {
        view: ViewCategory { title: "Wireframe View", prefix: "wireframe" },
        tasks: &[3, 4],
    },
    PlanEntry {
        view: ViewCategory {
            title: "Wireframe and Backframe Culling View",
            prefix: "culling_wireframe",
        },
        tasks: &[3, 4],
    },
    PlanEntry {
        view: ViewCategory { title: "Normals View", prefix: "normals" },
        tasks: &[5],
    },
    PlanEntry {
        view: ViewCategory {
            title: "Normals Backface Culling View",
            prefix: "culling_normals",
        },
        tasks: &[5],
    },
    PlanEntry {
        view: ViewCategory { title: "Texcoords View", prefix: "texcoords" },
        tasks: &[6],
    },
    PlanEntry {
        view: ViewCategory {
            title: "Texcoords Backface Culling View",
            prefix: "culling_texcoords",
        },
        tasks: &[6],
    },
];

/// Ordered view categories graded for a task.
pub fn view_plan(task: u8) -> Vec<ViewCategory> {
    VIEW_PLAN
        .iter()
        .filter(|entry| entry.tasks.contains(&task))
        .map(|entry| entry.view)
        .collect()
}

/// Image filename expected for one view category and camera pose.
pub fn image_filename(view: &ViewCategory, pose: &str) -> String {
    format!("{}_{}.png", view.prefix, pose)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_keys_resolve_in_order() {
        for n in 1..=6u8 {
            let task = lookup_submission(&format!("submission{}", n)).unwrap();
            assert_eq!(task.number, n);
            assert_eq!(task.name, format!("Task {}", n));
        }
    }

    #[test]
    fn test_unknown_submission_keys_fail_the_lookup() {
        assert!(lookup_submission("submission0").is_none());
        assert!(lookup_submission("submission7").is_none());
        assert!(lookup_submission("task1").is_none());
        assert!(lookup_submission("").is_none());
        assert!(lookup_submission("Submission1").is_none());
    }

    #[test]
    fn test_task1_uses_the_front_pose_only() {
        assert_eq!(camera_poses(1), ["front"]);
    }

    #[test]
    fn test_other_tasks_use_all_fourteen_poses_in_order() {
        let expected = [
            "front", "front_right", "right", "front_left", "left", "front_up", "up",
            "front_down", "down", "right_up", "right_down", "left_up", "left_down", "back",
        ];
        for task in 2..=6u8 {
            assert_eq!(camera_poses(task), expected);
        }
    }

    fn plan_prefixes(task: u8) -> Vec<&'static str> {
        view_plan(task).iter().map(|v| v.prefix).collect()
    }

    #[test]
    fn test_view_plan_membership_is_fixed_by_task() {
        assert_eq!(plan_prefixes(1), ["standard"]);
        assert_eq!(plan_prefixes(2), ["standard"]);
        assert_eq!(
            plan_prefixes(3),
            ["standard", "culling", "wireframe", "culling_wireframe"]
        );
        assert_eq!(
            plan_prefixes(4),
            ["standard", "culling", "wireframe", "culling_wireframe"]
        );
        assert_eq!(
            plan_prefixes(5),
            ["standard", "culling", "normals", "culling_normals"]
        );
        assert_eq!(
            plan_prefixes(6),
            ["standard", "culling", "texcoords", "culling_texcoords"]
        );
    }

    #[test]
    fn test_view_plan_carries_section_titles() {
        let titles: Vec<&str> = view_plan(3).iter().map(|v| v.title).collect();
        assert_eq!(
            titles,
            [
                "Standard View",
                "Backface Culling View",
                "Wireframe View",
                "Wireframe and Backframe Culling View",
            ]
        );
    }

    #[test]
    fn test_filenames_join_prefix_and_pose() {
        let view = ViewCategory { title: "Standard View", prefix: "standard" };
        assert_eq!(image_filename(&view, "front"), "standard_front.png");
        let view = ViewCategory {
            title: "Texcoords Backface Culling View",
            prefix: "culling_texcoords",
        };
        assert_eq!(
            image_filename(&view, "left_down"),
            "culling_texcoords_left_down.png"
        );
    }
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{create_dir, read_to_string, write};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn extconv() -> Command {
        Command::cargo_bin("extconv").unwrap()
    }

    #[test]
    fn test_converts_working_directory_without_arguments() {
        let temp_dir = tempdir().unwrap();
        write(temp_dir.path().join("main.dart"), "void main() {}").unwrap();
        write(temp_dir.path().join("readme.md"), "# readme").unwrap();

        extconv()
            .current_dir(temp_dir.path())
            .assert()
            .success()
            .stdout(
                predicate::str::starts_with("Converting .dart files to .txt files...\n")
                    .and(predicate::str::contains("success: main.dart -> main.txt\n"))
                    .and(predicate::str::ends_with("Conversion complete!\n")),
            );

        assert_eq!(
            read_to_string(temp_dir.path().join("main.txt")).unwrap(),
            "void main() {}"
        );
    }

    #[test]
    fn test_directory_argument() {
        let temp_dir = tempdir().unwrap();
        let project = temp_dir.path().join("project");
        create_dir(&project).unwrap();
        write(project.join("app.dart"), "app").unwrap();

        extconv()
            .current_dir(temp_dir.path())
            .args(["--directory", "project"])
            .assert()
            .success()
            .stdout(predicate::str::contains("success: app.dart -> app.txt"));

        assert!(project.join("app.txt").is_file());
    }

    #[test]
    fn test_failure_is_reported_and_exit_is_success() {
        let temp_dir = tempdir().unwrap();
        write(temp_dir.path().join("ok.dart"), "ok").unwrap();
        write(temp_dir.path().join("blocked.dart"), "blocked").unwrap();
        create_dir(temp_dir.path().join("blocked.txt")).unwrap();

        extconv()
            .current_dir(temp_dir.path())
            .assert()
            .success()
            .stdout(
                predicate::str::contains("success: ok.dart -> ok.txt")
                    .and(predicate::str::contains("error processing blocked.dart: "))
                    .and(predicate::str::contains("Conversion complete!")),
            );
    }

    #[test]
    fn test_dry_run() {
        let temp_dir = tempdir().unwrap();
        write(temp_dir.path().join("main.dart"), "void main() {}").unwrap();

        extconv()
            .current_dir(temp_dir.path())
            .arg("--dry")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "skipped: main.dart -> main.txt (dry run)",
            ));

        assert!(!temp_dir.path().join("main.txt").exists());
    }

    #[test]
    fn test_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();

        extconv()
            .current_dir(temp_dir.path())
            .args(["-d", "missing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read directory"));
    }

    #[test]
    fn test_log_file_records_summary() {
        let temp_dir = tempdir().unwrap();
        write(temp_dir.path().join("main.dart"), "void main() {}").unwrap();
        let log_path = temp_dir.path().join("run.log");

        extconv()
            .current_dir(temp_dir.path())
            .arg("-v")
            .arg("--log-file")
            .arg(&log_path)
            .assert()
            .success();

        let log = read_to_string(&log_path).unwrap();
        assert!(log.contains("1 matched, 1 converted, 0 skipped, 0 failed"));
    }
}

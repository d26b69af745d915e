//! Whole-operation tests against a temporary project directory

mod helper;

use helper::{MockRegistry, TestProject};
use pipflow::ops::{Operation, OperationError, Outcome, report};
use pipflow::rebuild::{BuildKind, Rebuild};

#[tokio::test]
async fn upgrade_bumps_single_package_without_rebuild() {
    let project = TestProject::new(
        "foo==1.0.0\n",
        MockRegistry::new().with_latest("foo", "2.0.0"),
    )
    .with_file("Dockerfile");

    let outcome = project
        .operations()
        .run(&Operation::Upgrade("foo".to_string()))
        .await
        .unwrap();

    assert!(outcome.committed());
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(project.requirements(), "foo==2.0.0\n");
    assert!(project.runner.builds().is_empty());
    assert_eq!(report::render(&outcome), "Bumped foo from 1.0.0 to 2.0.0\n");
}

#[tokio::test]
async fn upgrade_of_current_package_reports_already_current() {
    let original = "foo==1.0.0\n# trailing comment\n";
    let project = TestProject::new(original, MockRegistry::new().with_latest("foo", "1.0.0"));

    let outcome = project
        .operations()
        .run(&Operation::Upgrade("foo".to_string()))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::AlreadyCurrent {
            package: "foo".to_string(),
            version: "1.0.0".to_string(),
        }
    );
    assert_eq!(project.requirements(), original);
}

#[tokio::test]
async fn add_of_existing_package_fails_and_leaves_file_identical() {
    let original = "# pins\nbar==1.0\n\nfoo==2.0   \n";
    let project = TestProject::new(original, MockRegistry::new().with_latest("bar", "9.9"));

    let err = project
        .operations()
        .run(&Operation::Add("bar".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, OperationError::AlreadyPresent(_)));
    assert!(err.is_user_error());
    assert_eq!(project.requirements(), original);
    assert!(project.registry.lookups().is_empty());
}

#[tokio::test]
async fn add_pins_latest_version_and_rebuilds_compose() {
    let project = TestProject::new(
        "zope==5.0\nDjango==4.2.0\n",
        MockRegistry::new().with_latest("attrs", "24.2.0"),
    )
    .with_file("docker-compose.yaml")
    .with_file("Dockerfile");

    let outcome = project
        .operations()
        .run(&Operation::Add("attrs".to_string()))
        .await
        .unwrap();

    assert_eq!(outcome.rebuild(), Some(&Rebuild::Ran(BuildKind::Compose)));
    assert_eq!(
        project.requirements(),
        "attrs==24.2.0\nDjango==4.2.0\nzope==5.0\n"
    );
    assert_eq!(
        project.runner.builds(),
        vec![(BuildKind::Compose, project.dir.path().to_path_buf())]
    );
}

#[tokio::test]
async fn add_of_unknown_package_is_a_lookup_failure() {
    let original = "foo==1.0\n";
    let project = TestProject::new(original, MockRegistry::new());

    let err = project
        .operations()
        .run(&Operation::Add("no-such-package".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, OperationError::Lookup(_)));
    assert_eq!(project.requirements(), original);
    assert!(project.runner.builds().is_empty());
}

#[tokio::test]
async fn remove_rewrites_sorted_without_rebuild() {
    let project = TestProject::new(
        "# web\nrequests==2.31.0\nFlask==3.0.0\nattrs==23.1.0\n",
        MockRegistry::new(),
    )
    .with_file("Dockerfile");

    let outcome = project
        .operations()
        .run(&Operation::Remove("requests".to_string()))
        .await
        .unwrap();

    assert_eq!(report::render(&outcome), "requests removed\n");
    assert_eq!(project.requirements(), "attrs==23.1.0\nFlask==3.0.0\n");
    assert!(project.runner.builds().is_empty());
    assert_eq!(project.backups().len(), 1);
}

#[tokio::test]
async fn remove_of_missing_package_fails_without_mutation() {
    let original = "foo==1.0\n";
    let project = TestProject::new(original, MockRegistry::new());

    let err = project
        .operations()
        .run(&Operation::Remove("bar".to_string()))
        .await
        .unwrap_err();

    assert_eq!(report::render_error(&err), "Package not found: bar");
    assert_eq!(project.requirements(), original);
}

#[tokio::test]
async fn upgrade_all_bumps_sorts_reports_errors_and_rebuilds() {
    let project = TestProject::new(
        "foo==1.0.0\nbar==2.0.0\n",
        MockRegistry::new().with_latest("foo", "1.1.0"),
    )
    .with_file("Dockerfile");

    let outcome = project
        .operations()
        .run(&Operation::UpgradeAll)
        .await
        .unwrap();

    assert_eq!(project.requirements(), "bar==2.0.0\nfoo==1.1.0\n");
    assert_eq!(outcome.errors().len(), 1);
    assert_eq!(outcome.errors()[0].package, "bar");
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(outcome.rebuild(), Some(&Rebuild::Ran(BuildKind::Dockerfile)));
    assert_eq!(project.runner.builds().len(), 1);
    assert_eq!(project.registry.lookups(), vec!["foo", "bar"]);
}

#[tokio::test]
async fn upgrade_all_with_nothing_outdated_does_not_commit_or_rebuild() {
    let original = "# pinned\nfoo==1.1.0\nbar==3.0.0\n";
    let project = TestProject::new(
        original,
        MockRegistry::new()
            .with_latest("foo", "1.1.0")
            .with_latest("bar", "2.9.0"),
    )
    .with_file("docker-compose.yml");

    let outcome = project
        .operations()
        .run(&Operation::UpgradeAll)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::AllCurrent { errors: vec![] });
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(project.requirements(), original);
    assert!(project.runner.builds().is_empty());
}

#[tokio::test]
async fn upgrade_all_uses_numeric_ordering() {
    let project = TestProject::new(
        "foo==1.2.0\n",
        MockRegistry::new().with_latest("foo", "1.10.0"),
    );

    let outcome = project
        .operations()
        .run(&Operation::UpgradeAll)
        .await
        .unwrap();

    assert_eq!(project.requirements(), "foo==1.10.0\n");
    assert_eq!(outcome.rebuild(), Some(&Rebuild::NothingToBuild));
}

#[tokio::test]
async fn view_all_lists_outdated_and_collects_errors_read_only() {
    let original = "requests==2.31.0\nprivate-lib==0.1\nattrs==24.2.0\n";
    let project = TestProject::new(
        original,
        MockRegistry::new()
            .with_latest("requests", "2.32.5")
            .with_latest("attrs", "24.2.0"),
    );

    let outcome = project
        .operations()
        .run(&Operation::ViewAll)
        .await
        .unwrap();

    let Outcome::Viewed(scan) = &outcome else {
        panic!("expected a scan report, got {outcome:?}");
    };
    assert_eq!(scan.outdated.len(), 1);
    assert_eq!(scan.outdated[0].package, "requests");
    assert_eq!(scan.outdated[0].latest, "2.32.5");
    assert_eq!(scan.errors.len(), 1);
    assert_eq!(scan.errors[0].package, "private-lib");
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(project.requirements(), original);
    assert!(project.backups().is_empty());
}

#[tokio::test]
async fn mutating_operations_leave_a_backup_of_the_original() {
    let original = "# comment\nfoo==1.0.0\n";
    let project = TestProject::new(original, MockRegistry::new().with_latest("foo", "2.0.0"));

    project
        .operations()
        .run(&Operation::Upgrade("foo".to_string()))
        .await
        .unwrap();

    let backups = project.backups();
    assert_eq!(backups.len(), 1);
    assert_eq!(std::fs::read_to_string(&backups[0]).unwrap(), original);
}

#[tokio::test]
async fn errors_do_not_leak_between_runs() {
    let project = TestProject::new("missing==1.0\n", MockRegistry::new());
    let operations = project.operations();

    let first = operations.run(&Operation::ViewAll).await.unwrap();
    let second = operations.run(&Operation::ViewAll).await.unwrap();

    assert_eq!(first.errors().len(), 1);
    assert_eq!(second.errors().len(), 1);
}

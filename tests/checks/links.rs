use docgate::core::config::Config;
use docgate::core::issue::FileReport;
use docgate::core::validate::Validator;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn broken_targets(report: &FileReport) -> Vec<String> {
    report
        .issues
        .iter()
        .filter(|i| i.check == "related_link_broken")
        .map(|i| i.message.trim_start_matches("Cross-reference target does not exist: ").to_string())
        .collect()
}

fn tree() -> TempDir {
    let tmp = TempDir::new().expect("tempdir");
    let root = tmp.path();
    write(root, "js-nextjs/data-fetching/swr.md", "# SWR\n");
    write(root, "js-nextjs/components/forms.md", "# Forms\n");
    write(
        root,
        "js-nextjs/components/button.md",
        "---\ntitle: Button\n---\n\n## Usage\n\n[missing but not related](./nope.md)\n\n\
## Related Patterns\n\n\
- [Forms](./forms.md)\n\
- [Forms setup](forms.md#setup)\n\
- [SWR](../data-fetching/swr.md)\n\
- [Rooted SWR](/js-nextjs/data-fetching/swr.md)\n\
- [Next docs](https://nextjs.org/docs)\n\
- [Anchor](#usage)\n\
- [Gone](../data-fetching/react-query.md)\n\
- [Also gone](/php-wp/hooks/actions.md)\n\n\
```md\n[in code](./ignored.md)\n```\n",
    );
    tmp
}

#[test]
fn test_only_missing_related_targets_fail() {
    let tmp = tree();
    let validator = Validator::new(tmp.path(), Config::default());
    let report = validator.validate_file(&tmp.path().join("js-nextjs/components/button.md"));

    assert_eq!(
        broken_targets(&report),
        vec![
            "../data-fetching/react-query.md".to_string(),
            "/php-wp/hooks/actions.md".to_string(),
        ]
    );
}

#[test]
fn test_broken_link_points_at_its_line() {
    let tmp = tree();
    let path = tmp.path().join("js-nextjs/components/button.md");
    let report = Validator::new(tmp.path(), Config::default()).validate_file(&path);
    let content = fs::read_to_string(&path).unwrap();

    let issue = report
        .issues
        .iter()
        .find(|i| i.check == "related_link_broken")
        .expect("broken link issue");
    let line = content.lines().nth(issue.line_number.unwrap() - 1).unwrap();
    assert_eq!(line, "- [Gone](../data-fetching/react-query.md)");
    assert_eq!(
        issue.details.as_deref(),
        Some("In section: \"## Related Patterns\"")
    );
}

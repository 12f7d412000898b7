use termenv_collection::{Collection, MergedCollection, MutatorKind, WorkspaceFolder};

fn extension_order(merged: &MergedCollection, variable: &str) -> Vec<String> {
    merged
        .mutators(variable)
        .unwrap_or_default()
        .iter()
        .map(|m| m.extension_id().to_string())
        .collect()
}

#[test]
fn test_mutators_ordered_in_reverse_registration_order() {
    let mut a = Collection::new("ext.a");
    a.set("FOO", MutatorKind::Append, "a");
    let mut b = Collection::new("ext.b");
    b.set("FOO", MutatorKind::Append, "b");

    let merged = MergedCollection::merge([&a, &b], None);

    assert_eq!(extension_order(&merged, "FOO"), ["ext.b", "ext.a"]);
}

#[test]
fn test_replace_short_circuits_later_registrations() {
    let mut a = Collection::new("ext.a");
    a.set("FOO", MutatorKind::Replace, "only");
    let mut b = Collection::new("ext.b");
    b.set("FOO", MutatorKind::Append, "ignored");
    let mut c = Collection::new("ext.c");
    c.set("FOO", MutatorKind::Replace, "also ignored");

    let merged = MergedCollection::merge([&a, &b, &c], None);

    let mutators = merged.mutators("FOO").unwrap();
    assert_eq!(mutators.len(), 1);
    assert_eq!(mutators[0].extension_id(), "ext.a");
    assert_eq!(mutators[0].kind(), MutatorKind::Replace);
    assert_eq!(mutators[0].value(), "only");
}

#[test]
fn test_later_replace_fronts_the_sequence() {
    // A replace from a later registration does not erase earlier entries;
    // it lands at the front and determines the base value at apply time.
    let mut a = Collection::new("ext.a");
    a.set("FOO", MutatorKind::Append, "a");
    let mut b = Collection::new("ext.b");
    b.set("FOO", MutatorKind::Replace, "base");

    let merged = MergedCollection::merge([&a, &b], None);

    assert_eq!(extension_order(&merged, "FOO"), ["ext.b", "ext.a"]);
    assert_eq!(
        merged.mutators("FOO").unwrap()[0].kind(),
        MutatorKind::Replace
    );
}

#[test]
fn test_scope_filtering() {
    let folder_w = WorkspaceFolder::new("/work/w", 0);
    let folder_other = WorkspaceFolder::new("/work/other", 1);

    let mut a = Collection::new("ext.a");
    a.set_scoped("FOO", MutatorKind::Append, "w-only", folder_w.clone());

    // Scoped to a different folder: dropped entirely.
    let merged = MergedCollection::merge([&a], Some(&folder_other));
    assert!(merged.mutators("FOO").is_none());

    // Scoped to the owning folder: kept.
    let merged = MergedCollection::merge([&a], Some(&folder_w));
    assert_eq!(extension_order(&merged, "FOO"), ["ext.a"]);

    // Unscoped merge: kept.
    let merged = MergedCollection::merge([&a], None);
    assert_eq!(extension_order(&merged, "FOO"), ["ext.a"]);
}

#[test]
fn test_unscoped_mutators_survive_scoped_merge() {
    let folder_w = WorkspaceFolder::new("/work/w", 0);

    let mut a = Collection::new("ext.a");
    a.set("FOO", MutatorKind::Append, "everywhere");

    let merged = MergedCollection::merge([&a], Some(&folder_w));
    assert_eq!(extension_order(&merged, "FOO"), ["ext.a"]);
    assert_eq!(merged.owning_scope(), Some(&folder_w));
}

#[test]
fn test_variables_keep_encounter_order() {
    let mut a = Collection::new("ext.a");
    a.set("ONE", MutatorKind::Append, "1");
    a.set("TWO", MutatorKind::Append, "2");
    let mut b = Collection::new("ext.b");
    b.set("TWO", MutatorKind::Append, "2b");
    b.set("THREE", MutatorKind::Append, "3");

    let merged = MergedCollection::merge([&a, &b], None);

    let order: Vec<&str> = merged.variables().collect();
    assert_eq!(order, ["ONE", "TWO", "THREE"]);
    assert_eq!(merged.len(), 3);
}

#[test]
fn test_each_extension_appears_at_most_once_per_variable() {
    let mut a = Collection::new("ext.a");
    a.set("FOO", MutatorKind::Append, "first");
    a.set("FOO", MutatorKind::Prepend, "second");
    let mut b = Collection::new("ext.b");
    b.set("FOO", MutatorKind::Append, "b");

    let merged = MergedCollection::merge([&a, &b], None);

    let mutators = merged.mutators("FOO").unwrap();
    assert_eq!(mutators.len(), 2);
    // ext.a's second contribution replaced the first at the source.
    assert_eq!(mutators[1].extension_id(), "ext.a");
    assert_eq!(mutators[1].kind(), MutatorKind::Prepend);
    assert_eq!(mutators[1].value(), "second");
}

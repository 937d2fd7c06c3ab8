use super::*;

use std::fs::{create_dir_all, read, write};

fn library_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root.join(EBOOK_DIR_NAME))
        .expect("read library")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn moved(outcome: MoveOutcome) -> MoveReport {
    match outcome {
        MoveOutcome::Moved(report) => report,
        other => panic!("expected a move, got {other:?}"),
    }
}

#[test]
fn moves_books_then_reports_nothing_left() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    write(root.join("book.epub"), b"epub").expect("write book");
    write(root.join("notes.txt"), b"notes").expect("write notes");

    let report = moved(move_ebooks(root).expect("first run"));
    assert_eq!(
        report.moved,
        vec![EbookMoveRecord {
            original_path: root.join("book.epub"),
            destination_path: root.join("MyBooks/book.epub"),
        }]
    );
    assert!(root.join("MyBooks/book.epub").exists());
    assert!(!root.join("book.epub").exists());
    assert!(root.join("notes.txt").exists());

    let second = move_ebooks(root).expect("second run");
    assert!(
        matches!(&second, MoveOutcome::NoEbooks { root: r } if r == root),
        "got {second:?}"
    );
    assert_eq!(library_names(root), vec!["book.epub".to_string()]);
}

#[test]
fn empty_tree_still_creates_the_library() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    let outcome = move_ebooks(root).expect("run");
    assert!(matches!(outcome, MoveOutcome::NoEbooks { .. }));
    assert!(root.join(EBOOK_DIR_NAME).is_dir());
}

#[test]
fn nested_books_are_flattened_and_collisions_renamed() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    create_dir_all(root.join("a")).expect("create a");
    create_dir_all(root.join("b/deep")).expect("create b/deep");
    write(root.join("a/book.epub"), b"first").expect("write");
    write(root.join("b/book.epub"), b"second").expect("write");
    write(root.join("b/deep/paper.pdf"), b"pdf").expect("write");
    write(root.join("b/deep/novel.mobi"), b"mobi").expect("write");

    let report = moved(move_ebooks(root).expect("run"));

    assert_eq!(report.moved.len(), 4);
    assert!(report.skipped.is_empty());
    assert!(report.failed.is_empty());
    assert_eq!(
        library_names(root),
        vec![
            "book (1).epub".to_string(),
            "book.epub".to_string(),
            "novel.mobi".to_string(),
            "paper.pdf".to_string(),
        ]
    );
    // Walk order decides who keeps the plain name.
    assert_eq!(read(root.join("MyBooks/book.epub")).expect("read"), b"first");
    assert_eq!(
        read(root.join("MyBooks/book (1).epub")).expect("read"),
        b"second"
    );
}

#[test]
fn skip_policy_leaves_the_source_in_place() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    create_dir_all(root.join("MyBooks")).expect("create library");
    write(root.join("MyBooks/book.epub"), b"kept").expect("write");
    write(root.join("book.epub"), b"incoming").expect("write");

    let outcome = Relocator::new()
        .conflict_policy(ConflictPolicy::Skip)
        .run(root)
        .expect("run");

    let report = moved(outcome.clone());
    assert!(report.moved.is_empty());
    assert_eq!(report.skipped, vec![root.join("book.epub")]);
    assert_eq!(read(root.join("MyBooks/book.epub")).expect("read"), b"kept");
    assert!(root.join("book.epub").exists());
    assert!(outcome.to_string().contains("skipped: "));
}

#[test]
fn overwrite_policy_replaces_the_library_copy() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    create_dir_all(root.join("MyBooks")).expect("create library");
    write(root.join("MyBooks/book.epub"), b"old").expect("write");
    write(root.join("book.epub"), b"new").expect("write");

    let report = moved(
        Relocator::new()
            .conflict_policy(ConflictPolicy::Overwrite)
            .run(root)
            .expect("run"),
    );

    assert_eq!(report.moved.len(), 1);
    assert_eq!(library_names(root), vec!["book.epub".to_string()]);
    assert_eq!(read(root.join("MyBooks/book.epub")).expect("read"), b"new");
}

#[test]
fn suffix_match_is_case_sensitive() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    write(root.join("SHOUTING.EPUB"), b"x").expect("write");
    write(root.join("epub"), b"x").expect("write");

    let outcome = move_ebooks(root).expect("run");
    assert!(matches!(outcome, MoveOutcome::NoEbooks { .. }));
    assert!(root.join("SHOUTING.EPUB").exists());
}

#[test]
fn custom_library_and_extensions() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    write(root.join("comic.cbz"), b"x").expect("write");
    write(root.join("book.epub"), b"x").expect("write");

    let report = moved(
        Relocator::new()
            .library_name("Comics")
            .extensions([".cbz"])
            .run(root)
            .expect("run"),
    );

    assert_eq!(report.library, root.join("Comics"));
    assert_eq!(report.moved.len(), 1);
    assert!(root.join("Comics/comic.cbz").exists());
    assert!(root.join("book.epub").exists());
}

#[test]
fn missing_root_is_not_found_and_creates_nothing() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("gone");

    let err = move_ebooks(&missing).expect_err("must fail");
    assert!(err.is_not_found(), "unexpected error: {err}");
    assert!(!missing.exists());
}

#[test]
fn failed_move_does_not_stop_the_batch() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    // A directory in the way makes the first move fail even when overwriting.
    create_dir_all(root.join("MyBooks/a.epub")).expect("create blocking dir");
    write(root.join("a.epub"), b"a").expect("write");
    write(root.join("b.epub"), b"b").expect("write");

    let report = moved(
        Relocator::new()
            .conflict_policy(ConflictPolicy::Overwrite)
            .run(root)
            .expect("run"),
    );

    assert_eq!(
        report.moved,
        vec![EbookMoveRecord {
            original_path: root.join("b.epub"),
            destination_path: root.join("MyBooks/b.epub"),
        }]
    );
    let failed: Vec<&Path> = report.failed.iter().map(|f| f.path.as_path()).collect();
    assert_eq!(failed, vec![root.join("a.epub").as_path()]);
    assert!(root.join("a.epub").is_file());
    assert!(root.join("MyBooks/a.epub").is_dir());
}

#[test]
fn copy_then_remove_moves_the_bytes() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let from = tmp.path().join("book.epub");
    let to = tmp.path().join("elsewhere.epub");
    write(&from, b"chapter one").expect("write");

    copy_then_remove(&from, &to).expect("fallback move");

    assert!(!from.exists());
    assert_eq!(read(&to).expect("read"), b"chapter one");
}

#[test]
fn copy_then_remove_keeps_the_source_when_copy_fails() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let from = tmp.path().join("book.epub");
    write(&from, b"x").expect("write");

    let err = copy_then_remove(&from, &tmp.path().join("gone/book.epub"))
        .expect_err("missing parent");
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert!(from.exists());
}

#[cfg(unix)]
#[test]
fn non_utf8_names_are_moved_byte_for_byte() {
    use std::os::unix::ffi::OsStrExt;

    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    let name = OsStr::from_bytes(b"b\xff.epub");
    write(root.join(name), b"epub").expect("write");

    let report = moved(move_ebooks(root).expect("run"));

    assert_eq!(report.moved.len(), 1);
    assert_eq!(report.moved[0].destination_path, root.join("MyBooks").join(name));
    assert!(root.join("MyBooks").join(name).is_file());
    assert!(!root.join(name).exists());
}

#[test]
fn free_name_counts_up_from_one() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let dir = tmp.path();
    write(dir.join("book.epub"), b"x").expect("write");
    write(dir.join("book (1).epub"), b"x").expect("write");

    assert_eq!(
        free_name(dir, OsStr::new("book.epub")),
        dir.join("book (2).epub")
    );
    assert_eq!(free_name(dir, OsStr::new("README")), dir.join("README (1)"));
}

#[test]
fn display_messages() {
    let none = MoveOutcome::NoEbooks {
        root: PathBuf::from("/lib"),
    };
    assert_eq!(none.to_string(), "No e-books to move in '/lib'\n");

    let clean = MoveOutcome::Moved(MoveReport {
        library: PathBuf::from("/lib/MyBooks"),
        moved: Vec::new(),
        skipped: Vec::new(),
        failed: Vec::new(),
    });
    assert_eq!(clean.to_string(), "All e-books moved to '/lib/MyBooks'.\n");

    let partial = MoveOutcome::Moved(MoveReport {
        library: PathBuf::from("/lib/MyBooks"),
        moved: Vec::new(),
        skipped: Vec::new(),
        failed: vec![Failure::new("/lib/x.pdf", "permission denied")],
    });
    assert_eq!(
        partial.to_string(),
        "Moved 0 e-books to '/lib/MyBooks'.\nfailed: /lib/x.pdf: permission denied\n"
    );
}

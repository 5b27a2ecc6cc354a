use ising_scan::error::IsingError;
use ising_scan::lattice::Lattice;
use ising_scan::snapshot::SnapshotWriter;

#[test]
fn test_block_format() {
    let lat = Lattice::from_spins(2, 1.0, vec![1, -1, -1, 1]).unwrap();
    let mut w = SnapshotWriter::buffer();
    w.write_lattice(&lat).unwrap();
    w.write_lattice(&lat).unwrap();

    assert_eq!(w.blocks(), 2);
    let text = String::from_utf8(w.into_inner()).unwrap();
    assert_eq!(text, "1 -1\n-1 1\nEND\n1 -1\n-1 1\nEND\n");
}

#[test]
fn test_append_rendered_keeps_order() {
    let up = Lattice::uniform(1, 1.0, 1).unwrap();
    let down = Lattice::uniform(1, 1.0, -1).unwrap();

    let mut first = SnapshotWriter::buffer();
    first.write_lattice(&up).unwrap();
    let mut second = SnapshotWriter::buffer();
    second.write_lattice(&down).unwrap();

    let mut shared = SnapshotWriter::new(Vec::new());
    shared.append_rendered(first).unwrap();
    shared.append_rendered(second).unwrap();

    assert_eq!(shared.blocks(), 2);
    assert_eq!(String::from_utf8(shared.into_inner()).unwrap(), "1\nEND\n-1\nEND\n");
}

#[test]
fn test_create_truncates_existing_file() {
    let path = std::env::temp_dir().join(format!("ising_snapshot_trunc_{}.txt", std::process::id()));
    std::fs::write(&path, "stale\nEND\n").unwrap();

    let lat = Lattice::uniform(2, 1.0, 1).unwrap();
    let mut w = SnapshotWriter::create(&path).unwrap();
    w.write_lattice(&lat).unwrap();
    w.flush().unwrap();
    drop(w);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1 1\n1 1\nEND\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_unwritable_path_reports_path() {
    let path = std::env::temp_dir()
        .join("ising_no_such_dir_for_snapshots")
        .join("nested")
        .join("spins.txt");

    let err = SnapshotWriter::create(&path).err().expect("creating in a missing directory must fail");
    match &err {
        IsingError::Io { path: p, .. } => assert_eq!(p, &path),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("spins.txt"));
}

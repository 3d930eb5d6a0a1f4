#[cfg(test)]
mod test {
    use std::fs;
    use std::io::Write;
    use std::path::Path;

    use rqgen::command::Command;
    use rqgen::fixture;
    use rqgen::generator::Variant;

    fn write_file(path: &Path, content: &str) {
        let mut file = fs::File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1test.txt");
        write_file(&path, "k 4 q -1 3 k -2 ");

        let commands = fixture::load_fixture(&path).unwrap();
        assert_eq!(commands, vec![
            Command::KeyLookup(4),
            Command::RangeQuery(-1, 3),
            Command::KeyLookup(-2)
        ]);
    }

    #[test]
    fn test_load_rejects_malformed_fixture() {
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("1test.txt");
        write_file(&path, "k 4 z 1 ");
        assert!(fixture::load_fixture(&path).is_err());

        let path = dir.path().join("2test.txt");
        write_file(&path, "q 1 ");
        assert!(fixture::load_fixture(&path).is_err());
    }

    #[test]
    fn test_load_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(fixture::load_fixture(&dir.path().join("1test.txt")).is_err());
    }

    #[test]
    fn test_verify_shape_checks_command_count() {
        let commands = vec![Command::KeyLookup(1); 15];
        fixture::verify_shape(&commands, Variant::Positive).unwrap();

        let commands = vec![Command::KeyLookup(1); 14];
        assert!(fixture::verify_shape(&commands, Variant::Positive).is_err());
    }

    #[test]
    fn test_verify_shape_checks_leading_command() {
        let mut commands = vec![Command::KeyLookup(1); 15];
        commands[0] = Command::RangeQuery(1, 2);
        assert!(fixture::verify_shape(&commands, Variant::Positive).is_err());

        // the signed profile does not force a leading lookup
        let mut commands = vec![Command::KeyLookup(1); 100];
        commands[0] = Command::RangeQuery(1, 2);
        fixture::verify_shape(&commands, Variant::Signed).unwrap();
    }

    #[test]
    fn test_verify_bounds() {
        let commands = vec![Command::KeyLookup(-5), Command::RangeQuery(-5, 5)];
        fixture::verify_bounds(&commands, -5, 5).unwrap();

        let commands = vec![Command::KeyLookup(6)];
        assert!(fixture::verify_bounds(&commands, -5, 5).is_err());

        let commands = vec![Command::RangeQuery(1, 11)];
        assert!(fixture::verify_bounds(&commands, 1, 10).is_err());
    }

    #[test]
    fn test_load_answer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("8answer.txt");
        write_file(&path, "3 0 1 \n");

        assert_eq!(fixture::load_answer(&path).unwrap(), "3 0 1 \n");
    }
}

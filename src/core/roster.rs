use crate::domain::model::{Blacklist, Participant};
use crate::utils::error::{Result, SantaError};
use std::path::Path;

/// Load the participant roster from a two-column CSV file (name, email),
/// no header row. Rows with the wrong column count and duplicate
/// participants are errors, never a silent partial result.
pub fn load_participants(path: &str) -> Result<Vec<Participant>> {
    if !Path::new(path).exists() {
        return Err(SantaError::ConfigError {
            message: format!("Participants file not found: {}", path),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut participants: Vec<Participant> = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let record = row?;
        if record.len() != 2 {
            return Err(SantaError::MalformedRow {
                path: path.to_string(),
                line: index + 1,
                expected: 2,
                found: record.len(),
            });
        }

        let participant = Participant::new(&record[0], &record[1]);
        if participants.contains(&participant) {
            return Err(SantaError::DuplicateParticipant {
                name: participant.name,
                email: participant.email,
            });
        }
        participants.push(participant);
    }

    tracing::debug!("Loaded {} participants from {}", participants.len(), path);
    Ok(participants)
}

/// Load the blacklist from a two-column CSV file (name, name), no header
/// row. A missing file is not an error; it means no forbidden pairs.
pub fn load_blacklist(path: &str) -> Result<Blacklist> {
    if !Path::new(path).exists() {
        tracing::debug!("No blacklist file at {}, using an empty blacklist", path);
        return Ok(Blacklist::default());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut entries = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let record = row?;
        if record.len() != 2 {
            return Err(SantaError::MalformedRow {
                path: path.to_string(),
                line: index + 1,
                expected: 2,
                found: record.len(),
            });
        }
        entries.push((record[0].to_string(), record[1].to_string()));
    }

    tracing::debug!("Loaded {} blacklist entries from {}", entries.len(), path);
    Ok(Blacklist::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_load_participants() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "names.txt", "Alice,a@x.com\nBob,b@x.com\n");

        let participants = load_participants(&path).unwrap();
        assert_eq!(
            participants,
            vec![
                Participant::new("Alice", "a@x.com"),
                Participant::new("Bob", "b@x.com"),
            ]
        );
    }

    #[test]
    fn test_load_participants_missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");

        let result = load_participants(path.to_str().unwrap());
        assert!(matches!(result, Err(SantaError::ConfigError { .. })));
    }

    #[test]
    fn test_load_participants_malformed_row() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "names.txt", "Alice,a@x.com\njust-one-column\n");

        let result = load_participants(&path);
        match result {
            Err(SantaError::MalformedRow { line, found, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_load_participants_rejects_duplicates() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "names.txt", "Alice,a@x.com\nAlice,a@x.com\n");

        let result = load_participants(&path);
        assert!(matches!(
            result,
            Err(SantaError::DuplicateParticipant { .. })
        ));
    }

    #[test]
    fn test_same_name_different_email_is_not_a_duplicate() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "names.txt", "Alice,a@x.com\nAlice,a2@x.com\n");

        let participants = load_participants(&path).unwrap();
        assert_eq!(participants.len(), 2);
    }

    #[test]
    fn test_load_blacklist() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "blacklist.txt", "Alice,Bob\nCarl,Dave\n");

        let blacklist = load_blacklist(&path).unwrap();
        assert_eq!(blacklist.len(), 2);
        assert!(blacklist.forbids(
            &Participant::new("Bob", "b@x.com"),
            &Participant::new("Alice", "a@x.com"),
        ));
    }

    #[test]
    fn test_missing_blacklist_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        let blacklist = load_blacklist(path.to_str().unwrap()).unwrap();
        assert!(blacklist.is_empty());
    }

    #[test]
    fn test_load_blacklist_malformed_row() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "blacklist.txt", "Alice,Bob,Carl\n");

        let result = load_blacklist(&path);
        assert!(matches!(
            result,
            Err(SantaError::MalformedRow { found: 3, .. })
        ));
    }
}

use contact_book::core::codec;
use contact_book::{
    AppContactRepository, Contact, ContactRepository, ContactsDataSource, FullName, LocalStorage,
    MemoryStorage, Shell,
};
use std::io::Cursor;
use tempfile::TempDir;

fn contact(name: &str, sur_name: &str, birthday: &str) -> Contact {
    Contact::new(
        FullName::new(name, sur_name),
        "100",
        "mail@test",
        codec::parse_date(birthday).unwrap(),
        "Street 1",
    )
}

fn seeded_repo(contacts: Vec<Contact>) -> AppContactRepository<MemoryStorage> {
    let data_source = ContactsDataSource::new(MemoryStorage::new(), "contacts.json");
    data_source.write_contacts(&contacts).unwrap();
    AppContactRepository::load(data_source).unwrap()
}

fn run_shell(repository: &mut dyn ContactRepository, input: &str) -> String {
    let mut output = Vec::new();
    Shell::new(repository, Cursor::new(input.as_bytes()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_edit_selected_contact_and_save() {
    let mut repo = seeded_repo(vec![
        contact("Anna", "Smith", "01.01.1980"),
        contact("Ann", "Lee", "02.02.1982"),
    ]);

    let output = run_shell(
        &mut repo,
        "2\nann\n2\nAnnie\nLee\n200\nannie@test\n03.03.1983\nNew street\n0\n",
    );

    assert!(output.contains("Found 2 contact(s)."));
    assert!(output.contains("2. Ann Lee"));
    assert!(output.contains("Contact updated."));

    let stored = repo.data_source().read_contacts().unwrap();
    assert_eq!(stored[0], contact("Anna", "Smith", "01.01.1980"));
    assert_eq!(stored[1].full_name().name(), "Annie");
    assert_eq!(codec::format_date(stored[1].birthday()), "03.03.1983");
}

#[test]
fn test_delete_with_invalid_choice_keeps_list() {
    let mut repo = seeded_repo(vec![contact("Anna", "Smith", "01.01.1980")]);

    let output = run_shell(&mut repo, "3\nanna\n5\n3\nnobody\n0\n");

    assert!(output.contains("Invalid contact choice."));
    assert!(output.contains("No contacts with that name."));
    assert_eq!(repo.len(), 1);
}

#[test]
fn test_delete_selected_contact() {
    let mut repo = seeded_repo(vec![
        contact("Anna", "Smith", "01.01.1980"),
        contact("Bob", "Stone", "01.01.1981"),
    ]);

    let output = run_shell(&mut repo, "3\nbob\n1\n0\n");

    assert!(output.contains("Contact deleted."));
    assert_eq!(
        repo.data_source().read_contacts().unwrap(),
        vec![contact("Anna", "Smith", "01.01.1980")]
    );
}

#[test]
fn test_sort_by_birthday_then_list() {
    let mut repo = seeded_repo(vec![
        contact("Young", "One", "10.10.2010"),
        contact("Old", "One", "10.10.1910"),
    ]);

    let output = run_shell(&mut repo, "5\n5\n0\n");

    assert!(output.contains("Contacts sorted by Birthday."));
    let old = output.find("Name: Old").unwrap();
    let young = output.find("Name: Young").unwrap();
    assert!(old < young);
    assert_eq!(repo.contacts()[0].full_name().name(), "Old");
}

#[test]
fn test_sort_with_unknown_field() {
    let mut repo = seeded_repo(vec![contact("A", "B", "01.01.2000")]);
    let output = run_shell(&mut repo, "5\n9\n0\n");
    assert!(output.contains("Invalid field choice."));
}

#[test]
fn test_search_reports_matches_and_misses() {
    let mut repo = seeded_repo(vec![
        contact("Anna", "Smith", "01.01.1980"),
        contact("Carl", "Jones", "01.01.1981"),
    ]);

    let output = run_shell(&mut repo, "4\nSMI\n4\nzzz\n0\n");

    assert!(output.contains("Found 1 contact(s):"));
    assert!(output.contains("Surname: Smith"));
    assert!(!output.contains("Surname: Jones"));
    assert!(output.contains("No contacts match that criterion."));
}

#[test]
fn test_save_failure_is_reported_and_loop_continues() {
    let temp_dir = TempDir::new().unwrap();
    // A directory cannot be written as a file.
    let data_source = ContactsDataSource::new(LocalStorage::new(), temp_dir.path());
    let mut repo = AppContactRepository::new(data_source, Vec::new());

    let output = run_shell(
        &mut repo,
        "1\nIvan\nPetrov\n123\na@b.c\n01.02.1990\nKyiv\n6\n0\n",
    );

    assert!(output.contains("Error: Could not access the contacts file"));
    assert!(output.contains("All contacts:"));
    assert_eq!(repo.len(), 1);
}

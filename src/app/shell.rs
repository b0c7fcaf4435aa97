use crate::core::codec::{self, DATE_PATTERN};
use crate::core::sort::SortKey;
use crate::domain::model::{Contact, FullName};
use crate::domain::ports::ContactRepository;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const MENU: &str = "Menu:
0. Exit
1. Add contact
2. Edit contact
3. Delete contact
4. Search contacts
5. Sort contacts
6. Show all contacts
";

/// Menu-driven loop over a contact repository.
///
/// Every mutation is followed by `save_changes`. Failures from the repository
/// are printed and the loop carries on; only failures writing to `output` end it.
pub struct Shell<'a, R: BufRead, W: Write> {
    repository: &'a mut dyn ContactRepository,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(repository: &'a mut dyn ContactRepository, input: R, output: W) -> Self {
        Self {
            repository,
            input,
            output,
        }
    }

    /// Runs until the user picks `0` or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an operation: ")? else {
                break;
            };

            let outcome = match choice.trim() {
                "0" => break,
                "1" => self.add_contact(),
                "2" => self.edit_contact(),
                "3" => self.delete_contact(),
                "4" => self.search_contacts(),
                "5" => self.sort_contacts(),
                "6" => self.show_all_contacts(),
                _ => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                tracing::error!("Operation failed: {} (category: {:?})", e, e.category());
                writeln!(self.output, "Error: {}", e.user_friendly_message())?;
            }
            writeln!(self.output)?;
        }

        tracing::debug!("Shell finished");
        Ok(())
    }

    fn add_contact(&mut self) -> Result<()> {
        let Some(contact) = self.read_contact("")? else {
            return Ok(());
        };

        self.repository.add_contact(contact);
        self.repository.save_changes()?;
        writeln!(self.output, "Contact added.")?;
        Ok(())
    }

    fn edit_contact(&mut self) -> Result<()> {
        let Some(selected) = self.select_contact("Name of the contact to edit: ")? else {
            return Ok(());
        };
        let Some(updated) = self.read_contact("new ")? else {
            return Ok(());
        };

        self.repository.edit_contact(&selected, updated);
        self.repository.save_changes()?;
        writeln!(self.output, "Contact updated.")?;
        Ok(())
    }

    fn delete_contact(&mut self) -> Result<()> {
        let Some(selected) = self.select_contact("Name of the contact to delete: ")? else {
            return Ok(());
        };

        self.repository.delete_contact(&selected);
        self.repository.save_changes()?;
        writeln!(self.output, "Contact deleted.")?;
        Ok(())
    }

    fn search_contacts(&mut self) -> Result<()> {
        let Some(criterion) = self.prompt("Search criterion: ")? else {
            return Ok(());
        };

        let results = self.repository.search_contact(&criterion);
        if results.is_empty() {
            writeln!(self.output, "No contacts match that criterion.")?;
            return Ok(());
        }

        writeln!(self.output, "Found {} contact(s):", results.len())?;
        self.print_contacts(&results)
    }

    fn sort_contacts(&mut self) -> Result<()> {
        writeln!(self.output, "Sort by:")?;
        for (i, key) in SortKey::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, key)?;
        }
        let Some(choice) = self.prompt("Field number: ")? else {
            return Ok(());
        };

        let Some(key) = SortKey::from_menu_choice(&choice) else {
            writeln!(self.output, "Invalid field choice.")?;
            return Ok(());
        };

        self.repository.sort_contacts(&|a, b| key.compare(a, b));
        writeln!(self.output, "Contacts sorted by {}.", key)?;
        self.show_all_contacts()
    }

    fn show_all_contacts(&mut self) -> Result<()> {
        let contacts = self.repository.search_contact("");
        writeln!(self.output, "All contacts:")?;
        self.print_contacts(&contacts)
    }

    /// Searches by name and lets the user pick one of the matches.
    fn select_contact(&mut self, label: &str) -> Result<Option<Contact>> {
        let Some(name) = self.prompt(label)? else {
            return Ok(None);
        };

        let mut results = self.repository.search_contact(&name);
        if results.is_empty() {
            writeln!(self.output, "No contacts with that name.")?;
            return Ok(None);
        }

        writeln!(self.output, "Found {} contact(s).", results.len())?;
        for (i, contact) in results.iter().enumerate() {
            let full_name = contact.full_name();
            writeln!(
                self.output,
                "{}. {} {}",
                i + 1,
                full_name.name(),
                full_name.sur_name()
            )?;
        }

        let Some(choice) = self.prompt("Contact number: ")? else {
            return Ok(None);
        };
        match choice.trim().parse::<usize>() {
            Ok(n) if (1..=results.len()).contains(&n) => Ok(Some(results.swap_remove(n - 1))),
            _ => {
                writeln!(self.output, "Invalid contact choice.")?;
                Ok(None)
            }
        }
    }

    fn read_contact(&mut self, qualifier: &str) -> Result<Option<Contact>> {
        let Some(name) = self.prompt(&format!("Enter {}given name: ", qualifier))? else {
            return Ok(None);
        };
        let Some(sur_name) = self.prompt(&format!("Enter {}surname: ", qualifier))? else {
            return Ok(None);
        };
        let Some(phone_number) = self.prompt(&format!("Enter {}phone number: ", qualifier))? else {
            return Ok(None);
        };
        let Some(email) = self.prompt(&format!("Enter {}email: ", qualifier))? else {
            return Ok(None);
        };
        let birthday_label = format!("Enter {}birthday ({}): ", qualifier, DATE_PATTERN);
        let Some(birthday) = self.prompt(&birthday_label)? else {
            return Ok(None);
        };
        let Some(address) = self.prompt(&format!("Enter {}address: ", qualifier))? else {
            return Ok(None);
        };

        let birthday = codec::parse_date(birthday.trim())?;
        Ok(Some(Contact::new(
            FullName::new(name, sur_name),
            phone_number,
            email,
            birthday,
            address,
        )))
    }

    fn print_contacts(&mut self, contacts: &[Contact]) -> Result<()> {
        for (i, contact) in contacts.iter().enumerate() {
            writeln!(self.output, "Contact {}:", i + 1)?;
            writeln!(self.output, "Name: {}", contact.full_name().name())?;
            writeln!(self.output, "Surname: {}", contact.full_name().sur_name())?;
            writeln!(self.output, "Phone number: {}", contact.phone_number())?;
            writeln!(self.output, "Email: {}", contact.email())?;
            writeln!(
                self.output,
                "Birthday: {}",
                codec::format_date(contact.birthday())
            )?;
            writeln!(self.output, "Address: {}", contact.address())?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Prints `label` and reads one line. `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

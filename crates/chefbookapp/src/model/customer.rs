use super::{trusted_identity, trusted_optional, validated_optional, Record};
use crate::dto::{CustomerDto, NoteDto};
use crate::fields::{Field, FieldKind, Note, ValidationError};
use chrono::NaiveDate;

/// Raw, unvalidated values for a new customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub notes: Vec<(String, Vec<String>)>,
}

/// Outcome of [`Customer::edit_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneEdit {
    /// The old number was found and replaced.
    Replaced,
    /// The old number was not on record; the new one was added anyway.
    Added,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: Field,
    name: Option<Field>,
    phones: Vec<Field>,
    birthday: Option<Field>,
    address: Option<Field>,
    email: Option<Field>,
    notes: Vec<Note>,
}

impl Customer {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::from_validated_input(CustomerInput {
            name: Some(name.to_string()),
            ..Default::default()
        })
    }

    pub fn from_validated_input(input: CustomerInput) -> Result<Self, ValidationError> {
        let id = match input.id {
            Some(id) => Field::new(FieldKind::Identity, id)?,
            None => Field::generate_identity(),
        };
        let phones = input
            .phones
            .iter()
            .map(|phone| Field::new(FieldKind::Phone, phone.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let notes = input
            .notes
            .iter()
            .map(|(text, tags)| Note::with_tags(text, tags))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id,
            name: validated_optional(FieldKind::Name, input.name.as_deref())?,
            phones,
            birthday: validated_optional(FieldKind::Date, input.birthday.as_deref())?,
            address: validated_optional(FieldKind::Address, input.address.as_deref())?,
            email: validated_optional(FieldKind::Email, input.email.as_deref())?,
            notes,
        })
    }

    // --- Scalar attributes ---

    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(Field::raw)
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = Some(Field::new(FieldKind::Name, name)?);
        Ok(())
    }

    /// `None` when no birthday is set, or when a stored value is not a date.
    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday.as_ref().and_then(Field::as_date)
    }

    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Field::new(FieldKind::Date, birthday)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_ref().map(Field::raw)
    }

    pub fn set_address(&mut self, address: &str) -> Result<(), ValidationError> {
        self.address = Some(Field::new(FieldKind::Address, address)?);
        Ok(())
    }

    pub fn clear_address(&mut self) {
        self.address = None;
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().map(Field::raw)
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = Some(Field::new(FieldKind::Email, email)?);
        Ok(())
    }

    pub fn clear_email(&mut self) {
        self.email = None;
    }

    // --- Phones ---

    pub fn phones(&self) -> Vec<&str> {
        self.phones.iter().map(Field::raw).collect()
    }

    /// Replaces all phones. Nothing changes unless every number is valid.
    pub fn set_phones<I, T>(&mut self, phones: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.phones = phones
            .into_iter()
            .map(|phone| Field::new(FieldKind::Phone, phone.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(())
    }

    /// Appends a phone. Duplicates are not rejected; check [`Self::has_phone`] first.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Field::new(FieldKind::Phone, phone)?);
        Ok(())
    }

    /// Removes the first `old` and appends `new`. When `old` is not on record
    /// this is a plain add, reported as [`PhoneEdit::Added`].
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<PhoneEdit, ValidationError> {
        let replacement = Field::new(FieldKind::Phone, new)?;
        let outcome = if self.remove_phone(old) {
            PhoneEdit::Replaced
        } else {
            PhoneEdit::Added
        };
        self.phones.push(replacement);
        Ok(outcome)
    }

    /// Removes the first matching phone. Returns `false` if there was none.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.raw() == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p.raw() == phone)
    }

    // --- Notes (0-based indexes) ---

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Appends a note and returns its index.
    pub fn add_note<I, T>(&mut self, text: &str, tags: I) -> Result<usize, ValidationError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.notes.push(Note::with_tags(text, tags)?);
        Ok(self.notes.len() - 1)
    }

    /// Replaces the note at `index`, text and tags together. Returns `false`
    /// if there is no such note.
    pub fn edit_note<I, T>(&mut self, index: usize, text: &str, tags: I) -> Result<bool, ValidationError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let replacement = Note::with_tags(text, tags)?;
        match self.notes.get_mut(index) {
            Some(note) => {
                *note = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove_note(&mut self, index: usize) -> Option<Note> {
        (index < self.notes.len()).then(|| self.notes.remove(index))
    }

    /// Whether any note contains `fragment`.
    pub fn has_note(&self, fragment: &str) -> bool {
        self.notes.iter().any(|note| note.text().contains(fragment))
    }

    /// Tags the note at `index`. Returns `false` if there is no such note.
    pub fn add_tag_to_note(&mut self, index: usize, tag: &str) -> Result<bool, ValidationError> {
        match self.notes.get_mut(index) {
            Some(note) => {
                note.add_tag(tag)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Untags the note at `index`. Returns `false` if there is no such note.
    pub fn remove_tag_from_note(&mut self, index: usize, tag: &str) -> bool {
        match self.notes.get_mut(index) {
            Some(note) => {
                note.remove_tag(tag);
                true
            }
            None => false,
        }
    }

    pub fn notes_with_tag(&self, tag: &str) -> Vec<(usize, &Note)> {
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, note)| note.has_tag(tag))
            .collect()
    }

    /// Notes ordered by how many tags they carry, most first.
    pub fn notes_by_tag_count(&self) -> Vec<(usize, &Note)> {
        let mut notes: Vec<(usize, &Note)> = self.notes.iter().enumerate().collect();
        notes.sort_by(|(_, a), (_, b)| b.tags().len().cmp(&a.tags().len()));
        notes
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.notes.iter().any(|note| note.has_tag(tag))
    }

    /// Every tag across all notes, sorted, with repeats kept.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .notes
            .iter()
            .flat_map(|note| note.tags().iter().map(String::as_str))
            .collect();
        tags.sort_unstable();
        tags
    }
}

impl Record for Customer {
    type Dto = CustomerDto;

    fn id(&self) -> &str {
        self.id.raw()
    }

    fn dto(&self) -> CustomerDto {
        CustomerDto {
            id: Some(self.id.render()),
            name: self.name.as_ref().map(Field::render),
            phones: self.phones.iter().map(Field::render).collect(),
            birthday: self.birthday.as_ref().map(Field::render),
            address: self.address.as_ref().map(Field::render),
            email: self.email.as_ref().map(Field::render),
            notes: self
                .notes
                .iter()
                .map(|note| NoteDto {
                    text: note.text().to_string(),
                    tags: note.tags().to_vec(),
                })
                .collect(),
        }
    }

    fn from_trusted_dto(dto: CustomerDto) -> Self {
        Self {
            id: trusted_identity(dto.id),
            name: trusted_optional(FieldKind::Name, dto.name),
            phones: dto
                .phones
                .into_iter()
                .map(|phone| Field::trusted(FieldKind::Phone, phone))
                .collect(),
            birthday: trusted_optional(FieldKind::Date, dto.birthday),
            address: trusted_optional(FieldKind::Address, dto.address),
            email: trusted_optional(FieldKind::Email, dto.email),
            notes: dto
                .notes
                .into_iter()
                .map(|note| Note::trusted(&note.text, note.tags))
                .collect(),
        }
    }
}

use super::codec::{decode_note, encode_note, join_list, split_list};
use super::{read_value, write_value, Dto, FlatMap};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDto {
    pub text: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub notes: Vec<NoteDto>,
}

impl Dto for CustomerDto {
    const FIELDS: &'static [&'static str] = &[
        "id", "name", "phones", "birthday", "address", "email", "notes",
    ];

    fn from_flat_map(map: &FlatMap) -> Self {
        let list = |key: &str| {
            map.get(key)
                .map(|raw| split_list(raw))
                .unwrap_or_default()
        };

        Self {
            id: read_value(map, "id"),
            name: read_value(map, "name"),
            phones: list("phones"),
            birthday: read_value(map, "birthday"),
            address: read_value(map, "address"),
            email: read_value(map, "email"),
            notes: list("notes")
                .iter()
                .map(|raw| {
                    let (text, tags) = decode_note(raw);
                    NoteDto { text, tags }
                })
                .collect(),
        }
    }

    fn to_flat_map(&self) -> FlatMap {
        let mut map = FlatMap::new();
        write_value(&mut map, "id", &self.id);
        write_value(&mut map, "name", &self.name);
        map.insert("phones".to_string(), join_list(&self.phones));
        write_value(&mut map, "birthday", &self.birthday);
        write_value(&mut map, "address", &self.address);
        write_value(&mut map, "email", &self.email);
        map.insert(
            "notes".to_string(),
            join_list(
                self.notes
                    .iter()
                    .map(|note| encode_note(&note.text, &note.tags)),
            ),
        );
        map
    }
}

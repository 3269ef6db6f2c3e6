//! Dictionary entries as served by `/api/dict`.
//!
//! Entries are keyed by id. Loading never fails: when the dictionary cannot be fetched or
//! decoded the site shows an empty one.

use crate::lauvinko::client::ApiClient;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Every entry by id.
pub type DictEntries = BTreeMap<String, DictEntry>;

/// Payload of a successful `/api/dict` answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DictResponse {
    pub entries: DictEntries,
}

/// Inflection class of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemCategory {
    Fientive,
    Punctual,
    Stative,
    Uninflected,
}

/// One language's side of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LanguageForms {
    #[serde(default)]
    pub definition: Option<String>,
    /// Transcription by form id, e.g. `gn` or `pf.au`.
    #[serde(default)]
    pub forms: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictEntry {
    pub category: StemCategory,
    /// Source language name, e.g. `kasanic`.
    pub origin: String,
    #[serde(default)]
    pub citation_form: Option<String>,
    #[serde(default)]
    pub alphabetization: Option<String>,
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageForms>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: DictEntries,
}

impl Dictionary {
    pub fn new(entries: DictEntries) -> Self {
        Self { entries }
    }

    /// Fetch the dictionary, or an empty one on any failure.
    pub async fn load(client: &ApiClient) -> Self {
        match client.dictionary().await {
            Ok(entries) => {
                tracing::debug!("loaded {} dictionary entries", entries.len());
                Self::new(entries)
            }
            Err(err) => {
                tracing::warn!("dictionary unavailable: {}", err);
                Self::default()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&DictEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from one source language.
    pub fn of_origin(&self, origin: &str) -> Dictionary {
        Dictionary::new(
            self.entries
                .iter()
                .filter(|(_, entry)| entry.origin == origin)
                .map(|(id, entry)| (id.clone(), entry.clone()))
                .collect(),
        )
    }

    /// Entries in alphabetical order. Entries without a key sort by id.
    pub fn sorted(&self) -> Vec<(&str, &DictEntry)> {
        let mut out: Vec<(&str, &DictEntry)> = self
            .entries
            .iter()
            .map(|(id, entry)| (id.as_str(), entry))
            .collect();
        out.sort_by(|(a_id, a), (b_id, b)| {
            let a_key = a.alphabetization.as_deref().unwrap_or(*a_id);
            let b_key = b.alphabetization.as_deref().unwrap_or(*b_id);
            a_key.cmp(b_key).then_with(|| a_id.cmp(b_id))
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lauvinko::client::ApiResponse;

    const SAMPLE: &str = r#"{
        "ratu": {
            "category": "fientive",
            "origin": "kasanic",
            "alphabetization": "ratu",
            "languages": {
                "pk": {"definition": "to see", "forms": {"gn": "ratu"}},
                "lv": {"forms": {"pf.au": "ràtu"}}
            }
        },
        "aka": {
            "category": "stative",
            "origin": "kasanic",
            "alphabetization": "zaka",
            "languages": {}
        },
        "kopi": {
            "category": "uninflected",
            "origin": "malay",
            "citation_form": "kopi",
            "extra": 1
        }
    }"#;

    fn sample() -> Dictionary {
        Dictionary::new(serde_json::from_str(SAMPLE).unwrap())
    }

    #[test]
    fn decodes_entries() {
        let dict = sample();
        assert_eq!(dict.len(), 3);
        let ratu = dict.get("ratu").unwrap();
        assert_eq!(ratu.category, StemCategory::Fientive);
        assert_eq!(ratu.languages["pk"].definition.as_deref(), Some("to see"));
        assert_eq!(ratu.languages["lv"].forms["pf.au"], "ràtu");
        assert_eq!(dict.get("kopi").unwrap().citation_form.as_deref(), Some("kopi"));
    }

    #[test]
    fn sorts_by_alphabetization_key() {
        let dict = sample();
        let ids: Vec<&str> = dict.sorted().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["kopi", "ratu", "aka"]);
    }

    #[test]
    fn filters_by_origin() {
        let kasanic = sample().of_origin("kasanic");
        assert_eq!(kasanic.len(), 2);
        assert!(kasanic.get("kopi").is_none());
    }

    #[test]
    fn entries_sit_under_the_response_envelope() {
        let envelope: ApiResponse<DictResponse> = serde_json::from_str(
            r#"{"success": true, "response": {"entries": {
                "ratu": {"category": "fientive", "origin": "kasanic", "languages": {}}
            }}}"#,
        )
        .unwrap();
        let dict = Dictionary::new(envelope.into_result().unwrap().entries);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("ratu").unwrap().origin, "kasanic");
    }

    #[tokio::test]
    async fn load_failure_is_empty() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(&format!("http://{}", addr)).unwrap();
        assert!(Dictionary::load(&client).await.is_empty());
    }
}

use arrow::datatypes::{DataType, Field};
use log::kv::{ToValue, Value};
use log::{debug, trace};
use serde::Serialize;

use crate::chunk::dictionary::Dictionary;
use crate::chunk::number::{Element, Number};
use crate::chunk::widening::{CodeVec, NumericVec};
use crate::conf::ChunkConfig;
use crate::core::{ColchunkError, Semantics, TypeIndex};

/// Parsed values of one column for one parse chunk.
///
/// The column starts out numeric and commits to categorical the first time
/// non-empty text arrives, or any text arrives while it is still empty. The
/// commit is irreversible: from then on numbers are stored as their decimal
/// text. At most one of the numeric and code stores is ever non-empty.
#[derive(Debug, Clone)]
pub struct ColumnChunk {
    column_name: String,
    config: ChunkConfig,
    number_data: NumericVec,
    cat_data: CodeVec,
    dictionary: Dictionary,
}

/// What the merge step needs to know about a finished chunk.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChunkSummary {
    pub column: String,
    pub semantics: Semantics,
    pub type_index: TypeIndex,
    pub len: usize,
    pub distinct: usize,
}

impl ToValue for ChunkSummary {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}

impl ColumnChunk {
    /// Creates a chunk with an empty name.
    pub fn new() -> Self {
        Self::with_name("")
    }

    pub fn with_name(column_name: &str) -> Self {
        Self::with_config(column_name, &ChunkConfig::default())
    }

    pub fn with_config(column_name: &str, config: &ChunkConfig) -> Self {
        Self {
            column_name: column_name.to_string(),
            config: config.clone(),
            number_data: NumericVec::with_capacity(config.initial_capacity),
            cat_data: CodeVec::new(),
            dictionary: Dictionary::new(),
        }
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// Passes a number to the column. Once the column is categorical the
    /// number is rendered to text and interned instead.
    pub fn process_numeric(&mut self, value: impl Into<Number>) {
        let value = value.into();
        if self.cat_data.is_empty() {
            self.number_data.push(value);
        } else {
            let key = self.config.render(value);
            self.add_category(&key);
        }
    }

    pub fn process_float(&mut self, value: f64) {
        self.process_numeric(value);
    }

    pub fn process_integer(&mut self, value: i64) {
        self.process_numeric(value);
    }

    /// Passes a text field to the column. If numbers were seen before, they
    /// are all converted to categories first, except when `value` is empty:
    /// a blank field in a numeric column is recorded as zero.
    pub fn process_categorical(&mut self, value: &str) {
        if !self.number_data.is_empty() {
            if value.is_empty() {
                self.number_data.push(0u8);
                return;
            }
            self.convert_to_string();
        }
        self.add_category(value);
    }

    /// Raw token bytes, decoded as UTF-8 with invalid sequences replaced.
    pub fn process_categorical_bytes(&mut self, value: &[u8]) {
        self.process_categorical(&String::from_utf8_lossy(value));
    }

    fn add_category(&mut self, value: &str) {
        let id = self.dictionary.intern(value);
        self.cat_data.push(id);
    }

    fn convert_to_string(&mut self) {
        let rows = self.number_data.len();
        debug!(
            column = self.column_name.as_str(), rows = rows, from = self.number_data.repr().as_str();
            "converting numeric column to categorical"
        );
        for value in self.number_data.iter() {
            let key = self.config.render_stored(value);
            let id = self.dictionary.intern(&key);
            self.cat_data.push(id);
        }
        self.number_data.clear();
        self.number_data.shrink_to_fit();
    }

    pub fn semantics(&self) -> Semantics {
        if self.cat_data.is_empty() {
            Semantics::Numeric
        } else {
            Semantics::Stringish
        }
    }

    pub fn is_stringish(&self) -> bool {
        self.semantics() == Semantics::Stringish
    }

    pub fn type_index(&self) -> TypeIndex {
        if self.is_stringish() {
            TypeIndex::Utf8
        } else {
            TypeIndex::Numeric(self.number_data.repr())
        }
    }

    /// Type able to hold both this chunk and a peer chunk of the same column.
    pub fn common_type_index(&self, other: TypeIndex) -> TypeIndex {
        match other {
            _ if self.is_stringish() => TypeIndex::Utf8,
            TypeIndex::Utf8 => TypeIndex::Utf8,
            TypeIndex::Numeric(repr) => TypeIndex::Numeric(self.number_data.common_repr(repr)),
        }
    }

    /// Copies every numeric value, cast to `T`, to the front of `out`.
    /// Returns the number of values written.
    pub fn insert_numeric_into<T: Element>(&self, out: &mut [T]) -> Result<usize, ColchunkError> {
        if self.is_stringish() {
            return Err(ColchunkError::NotNumeric(self.column_name.clone()));
        }
        let needed = self.number_data.len();
        if out.len() < needed {
            return Err(ColchunkError::BufferTooSmall {
                needed,
                got: out.len(),
            });
        }
        Ok(self.number_data.copy_into(out))
    }

    /// Numeric value at `idx`, cast to `T`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is past the numeric store.
    pub fn get_numeric<T: Element>(&self, idx: usize) -> T {
        self.number_data.get(idx)
    }

    /// Dictionary code at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is past the code store.
    pub fn get_code(&self, idx: usize) -> usize {
        self.cat_data.get(idx)
    }

    /// Category text at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is past the code store.
    pub fn category(&self, idx: usize) -> &str {
        &self.dictionary.keys()[self.get_code(idx)]
    }

    pub fn len(&self) -> usize {
        if self.is_stringish() {
            self.cat_data.len()
        } else {
            self.number_data.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn numbers(&self) -> &NumericVec {
        &self.number_data
    }

    pub fn codes(&self) -> &CodeVec {
        &self.cat_data
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Interned strings in first-seen order, indexed by code.
    pub fn dictionary_keys(&self) -> &[String] {
        self.dictionary.keys()
    }

    /// Arrow field describing the chunk's current type.
    pub fn field(&self) -> Field {
        Field::new(
            self.column_name.as_str(),
            DataType::from(&self.type_index()),
            false,
        )
    }

    pub fn summary(&self) -> ChunkSummary {
        ChunkSummary {
            column: self.column_name.clone(),
            semantics: self.semantics(),
            type_index: self.type_index(),
            len: self.len(),
            distinct: self.dictionary.len(),
        }
    }

    /// Empties the chunk and releases its storage.
    pub fn clear(&mut self) {
        trace!(summary = self.summary(); "clearing column chunk");
        self.number_data.clear();
        self.cat_data.clear();
        self.dictionary.clear();
    }
}

impl Default for ColumnChunk {
    fn default() -> Self {
        Self::new()
    }
}

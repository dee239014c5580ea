// ============================================================================
// TRANSLATION TABLE - Tabla de traducciones por idioma
// ============================================================================
// Documento JSON anidado. Las claves se recorren con notación de puntos
// ("hero.cta.quote"); los segmentos numéricos indexan listas ("whyUs.points.0").
// El orden de autoría se conserva (serde_json con preserve_order).
// ============================================================================

use serde_json::Value;

/// Valor resuelto: texto, subárbol ordenado o lista
#[derive(Clone, Debug, PartialEq, Default)]
pub enum TranslationValue {
    #[default]
    Empty,
    Text(String),
    Map(Vec<(String, TranslationValue)>),
    List(Vec<TranslationValue>),
}

impl TranslationValue {
    pub fn is_empty(&self) -> bool {
        match self {
            TranslationValue::Empty => true,
            TranslationValue::Text(_) => false,
            TranslationValue::Map(entries) => entries.is_empty(),
            TranslationValue::List(items) => items.is_empty(),
        }
    }

    /// Texto de una hoja; cadena vacía para estructuras
    pub fn as_text(&self) -> String {
        match self {
            TranslationValue::Text(text) => text.clone(),
            _ => String::new(),
        }
    }

    /// Campo de texto de un registro (`{"title": ..., "description": ...}`)
    pub fn field(&self, name: &str) -> String {
        match self {
            TranslationValue::Map(entries) => entries
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_text())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Sub-valor de un registro
    pub fn child(&self, name: &str) -> TranslationValue {
        match self {
            TranslationValue::Map(entries) => entries
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .unwrap_or_default(),
            _ => TranslationValue::Empty,
        }
    }

    /// Entradas en orden de autoría; las listas usan su índice como clave
    pub fn entries(&self) -> Vec<(String, TranslationValue)> {
        match self {
            TranslationValue::Map(entries) => entries.clone(),
            TranslationValue::List(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Elementos de una lista; los mapas devuelven sus valores en orden
    pub fn items(&self) -> Vec<TranslationValue> {
        match self {
            TranslationValue::List(items) => items.clone(),
            TranslationValue::Map(entries) => entries.iter().map(|(_, value)| value.clone()).collect(),
            _ => Vec::new(),
        }
    }

    /// Lista de hojas de texto
    pub fn texts(&self) -> Vec<String> {
        self.items().iter().map(TranslationValue::as_text).collect()
    }
}

impl From<&Value> for TranslationValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => TranslationValue::Empty,
            Value::Bool(flag) => TranslationValue::Text(flag.to_string()),
            Value::Number(number) => TranslationValue::Text(number.to_string()),
            Value::String(text) => TranslationValue::Text(text.clone()),
            Value::Array(items) => TranslationValue::List(items.iter().map(TranslationValue::from).collect()),
            Value::Object(map) => TranslationValue::Map(
                map.iter()
                    .map(|(key, value)| (key.clone(), TranslationValue::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Tabla de un idioma
#[derive(Clone, Debug)]
pub struct TranslationTable {
    root: Value,
}

impl TranslationTable {
    pub fn parse(source: &str) -> Result<Self, String> {
        let root: Value = serde_json::from_str(source)
            .map_err(|e| format!("Error parseando tabla de traducciones: {}", e))?;
        if !root.is_object() {
            return Err("La tabla de traducciones debe ser un objeto JSON".to_string());
        }
        Ok(Self { root })
    }

    /// Busca una ruta con puntos; `None` si falta o es `null`
    pub fn lookup(&self, key_path: &str) -> Option<&Value> {
        if key_path.is_empty() {
            return None;
        }
        let mut current = &self.root;
        for segment in key_path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        if current.is_null() {
            None
        } else {
            Some(current)
        }
    }

    pub fn contains(&self, key_path: &str) -> bool {
        self.lookup(key_path).is_some()
    }

    /// Todas las rutas hoja de la tabla (en orden de autoría)
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(&self.root, String::new(), &mut paths);
        paths
    }
}

fn collect_leaf_paths(value: &Value, prefix: String, paths: &mut Vec<String>) {
    let join = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", prefix, segment)
        }
    };
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect_leaf_paths(child, join(key), paths);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_leaf_paths(child, join(&index.to_string()), paths);
            }
        }
        _ => paths.push(prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "hero": { "title": "Premium Timber", "cta": { "quote": "Request a Quote" } },
        "faq": { "questions": { "q2": { "question": "B?", "answer": "b" }, "q1": { "question": "A?", "answer": "a" } } },
        "whyUs": { "points": ["one", "two", "three"] },
        "stats": { "years": 15, "certified": true, "missing": null }
    }"#;

    fn table() -> TranslationTable {
        TranslationTable::parse(SAMPLE).expect("sample table")
    }

    #[test]
    fn looks_up_nested_leaves() {
        let table = table();
        assert_eq!(table.lookup("hero.cta.quote").and_then(Value::as_str), Some("Request a Quote"));
        assert!(table.lookup("hero.cta.catalog").is_none());
        assert!(table.lookup("").is_none());
        assert!(table.lookup("hero.title.extra").is_none());
    }

    #[test]
    fn list_segments_are_indices() {
        let table = table();
        assert_eq!(table.lookup("whyUs.points.1").and_then(Value::as_str), Some("two"));
        assert!(table.lookup("whyUs.points.7").is_none());
        assert!(table.lookup("whyUs.points.x").is_none());
    }

    #[test]
    fn null_counts_as_missing() {
        assert!(!table().contains("stats.missing"));
    }

    #[test]
    fn structured_values_keep_authoring_order() {
        let table = table();
        let faq = TranslationValue::from(table.lookup("faq.questions").expect("faq"));
        let keys: Vec<String> = faq.entries().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["q2", "q1"]);
        assert_eq!(faq.child("q1").field("answer"), "a");
    }

    #[test]
    fn scalar_leaves_render_as_text() {
        let table = table();
        assert_eq!(TranslationValue::from(table.lookup("stats.years").expect("years")).as_text(), "15");
        assert_eq!(TranslationValue::from(table.lookup("stats.certified").expect("flag")).as_text(), "true");
    }

    #[test]
    fn leaf_paths_cover_lists_and_maps() {
        let paths = table().leaf_paths();
        assert!(paths.contains(&"whyUs.points.2".to_string()));
        assert!(paths.contains(&"faq.questions.q1.answer".to_string()));
        assert!(paths.contains(&"stats.missing".to_string()));
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(TranslationTable::parse("[1, 2]").is_err());
        assert!(TranslationTable::parse("{ broken").is_err());
    }
}

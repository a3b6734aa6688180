//! XMind workbook decoding
//!
//! An .xmind file is a zip archive. Modern files (XMind 2020/Zen) store the
//! map as `content.json`; XMind 8 files store it as `content.xml`. Both
//! generations decode into the same `Topic` tree.

use std::io::{Cursor, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Topic;

/// Decode workbook bytes and return the first sheet's root topic.
pub fn parse_workbook(bytes: &[u8], path: &Path) -> ApplicationResult<Topic> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| decode_error(path, format!("not an XMind archive: {}", e)))?;

    if let Some(json) = read_entry(&mut archive, "content.json", path)? {
        return root_from_json(&json, path);
    }
    if let Some(xml) = read_entry(&mut archive, "content.xml", path)? {
        return root_from_xml(&xml, path);
    }
    Err(decode_error(
        path,
        "archive contains neither content.json nor content.xml".to_string(),
    ))
}

fn decode_error(path: &Path, message: String) -> ApplicationError {
    ApplicationError::Decode {
        path: path.to_path_buf(),
        message,
    }
}

fn read_entry(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    name: &str,
    path: &Path,
) -> ApplicationResult<Option<String>> {
    match archive.by_name(name) {
        Ok(mut entry) => {
            let mut content = String::new();
            entry
                .read_to_string(&mut content)
                .map_err(|e| decode_error(path, format!("cannot read {}: {}", name, e)))?;
            Ok(Some(content))
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(decode_error(path, format!("cannot open {}: {}", name, e))),
    }
}

/// Shared shape checks for both storage generations.
fn first_root(sheet_count: usize, root: Option<Topic>) -> ApplicationResult<Topic> {
    if sheet_count == 0 {
        return Err(ApplicationError::InvalidStructure(
            "workbook has no sheets".to_string(),
        ));
    }
    if sheet_count > 1 {
        debug!("workbook has {} sheets, converting the first", sheet_count);
    }
    root.ok_or_else(|| {
        ApplicationError::InvalidStructure("first sheet has no root topic".to_string())
    })
}

// ============================================================
// XMind 2020 / Zen: content.json
// ============================================================

#[derive(Debug, Deserialize)]
struct JsonSheet {
    #[serde(rename = "rootTopic")]
    root_topic: Option<JsonTopic>,
}

#[derive(Debug, Deserialize)]
struct JsonTopic {
    title: Option<String>,
    notes: Option<JsonNotes>,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    markers: Vec<JsonMarker>,
    children: Option<JsonChildren>,
}

#[derive(Debug, Deserialize)]
struct JsonNotes {
    plain: Option<JsonPlainNote>,
}

#[derive(Debug, Deserialize)]
struct JsonPlainNote {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JsonMarker {
    #[serde(rename = "markerId")]
    marker_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JsonChildren {
    #[serde(default)]
    attached: Vec<JsonTopic>,
}

fn root_from_json(content: &str, path: &Path) -> ApplicationResult<Topic> {
    let sheets: Vec<JsonSheet> = serde_json::from_str(content)
        .map_err(|e| decode_error(path, format!("content.json: {}", e)))?;
    let sheet_count = sheets.len();
    let root = sheets
        .into_iter()
        .next()
        .and_then(|s| s.root_topic)
        .map(topic_from_json);
    first_root(sheet_count, root)
}

fn topic_from_json(topic: JsonTopic) -> Topic {
    Topic {
        title: topic.title.unwrap_or_default(),
        note: topic
            .notes
            .and_then(|n| n.plain)
            .and_then(|p| p.content)
            .unwrap_or_default(),
        labels: topic.labels,
        markers: topic
            .markers
            .into_iter()
            .filter_map(|m| m.marker_id)
            .collect(),
        children: topic
            .children
            .map(|c| c.attached.into_iter().map(topic_from_json).collect())
            .unwrap_or_default(),
    }
}

// ============================================================
// XMind 8 legacy: content.xml
// ============================================================

#[derive(Debug, Deserialize)]
struct XmlContent {
    #[serde(rename = "sheet", default)]
    sheets: Vec<XmlSheet>,
}

#[derive(Debug, Deserialize)]
struct XmlSheet {
    topic: Option<XmlTopic>,
}

#[derive(Debug, Deserialize)]
struct XmlTopic {
    title: Option<XmlText>,
    notes: Option<XmlNotes>,
    labels: Option<XmlLabels>,
    #[serde(rename = "marker-refs")]
    marker_refs: Option<XmlMarkerRefs>,
    children: Option<XmlChildren>,
}

/// Element whose text content is all we need (attributes like `svg:width`
/// are ignored).
#[derive(Debug, Deserialize)]
struct XmlText {
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct XmlNotes {
    plain: Option<XmlText>,
}

#[derive(Debug, Deserialize)]
struct XmlLabels {
    #[serde(rename = "label", default)]
    labels: Vec<XmlText>,
}

#[derive(Debug, Deserialize)]
struct XmlMarkerRefs {
    #[serde(rename = "marker-ref", default)]
    refs: Vec<XmlMarkerRef>,
}

#[derive(Debug, Deserialize)]
struct XmlMarkerRef {
    #[serde(rename = "@marker-id")]
    marker_id: String,
}

#[derive(Debug, Deserialize)]
struct XmlChildren {
    #[serde(rename = "topics", default)]
    groups: Vec<XmlTopicGroup>,
}

#[derive(Debug, Deserialize)]
struct XmlTopicGroup {
    #[serde(rename = "@type")]
    kind: Option<String>,
    #[serde(rename = "topic", default)]
    topics: Vec<XmlTopic>,
}

fn root_from_xml(content: &str, path: &Path) -> ApplicationResult<Topic> {
    let decoded: XmlContent = quick_xml::de::from_str(content)
        .map_err(|e| decode_error(path, format!("content.xml: {}", e)))?;
    let sheet_count = decoded.sheets.len();
    let root = decoded
        .sheets
        .into_iter()
        .next()
        .and_then(|s| s.topic)
        .map(topic_from_xml);
    first_root(sheet_count, root)
}

fn topic_from_xml(topic: XmlTopic) -> Topic {
    Topic {
        title: topic.title.map(|t| t.value).unwrap_or_default(),
        note: topic
            .notes
            .and_then(|n| n.plain)
            .map(|p| p.value)
            .unwrap_or_default(),
        labels: topic
            .labels
            .map(|l| l.labels.into_iter().map(|t| t.value).collect())
            .unwrap_or_default(),
        markers: topic
            .marker_refs
            .map(|m| m.refs.into_iter().map(|r| r.marker_id).collect())
            .unwrap_or_default(),
        // Only attached children belong to the hierarchy; detached and
        // summary topics are ignored.
        children: topic
            .children
            .map(|c| {
                c.groups
                    .into_iter()
                    .filter(|g| g.kind.as_deref() == Some("attached"))
                    .flat_map(|g| g.topics)
                    .map(topic_from_xml)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

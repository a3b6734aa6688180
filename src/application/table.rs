//! Case table rendering (CSV)

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::TestCase;

/// Localized column headers of the test case import template.
pub const HEADERS: [&str; 7] = [
    "所属模块",
    "用例标题",
    "用例类型",
    "优先级",
    "前置条件",
    "步骤",
    "预期",
];

/// UTF-8 byte order mark; spreadsheet tools need it to detect the encoding.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Render the case list as CSV bytes: BOM, header row, one row per case in
/// emission order. Multi-line steps/expects stay inside quoted fields.
pub fn render_csv(cases: &[TestCase]) -> ApplicationResult<Vec<u8>> {
    let mut buf = Vec::from(UTF8_BOM);
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(HEADERS).map_err(render_error)?;
        for case in cases {
            let priority = case.priority.to_string();
            writer
                .write_record([
                    case.module.as_str(),
                    case.title.as_str(),
                    case.case_type.as_str(),
                    priority.as_str(),
                    case.precondition.as_str(),
                    case.steps.as_str(),
                    case.expects.as_str(),
                ])
                .map_err(render_error)?;
        }
        writer.flush().map_err(render_error)?;
    }
    Ok(buf)
}

fn render_error(e: impl std::error::Error + Send + Sync + 'static) -> ApplicationError {
    ApplicationError::OperationFailed {
        context: "render case table".to_string(),
        source: Box::new(e),
    }
}

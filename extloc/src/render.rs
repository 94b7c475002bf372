//! Report rendering: the per-extension table and the quiet summary.

use console::Style;
use extloclib::ScanResult;

/// Center a value inside `width`, biasing left when the padding is odd.
fn pad_center(s: &str, width: usize) -> String {
    if s.len() >= width {
        return s.to_string();
    }
    let spaces = width - s.len();
    let left = spaces / 2;
    let right = spaces - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Render the verbose table: one row per extension sorted by name, with a
/// trailing totals line. Column widths grow with the content and are
/// padded to an even count. The extension cell is cyan when `color` is on.
pub fn render_table(result: &ScanResult, color: bool) -> String {
    if result.is_empty() {
        return "No results\n".to_string();
    }

    let (h_ext, h_files, h_code, h_comm) = ("Extension", "Files", "Code", "Comments");

    let mut ext_w = h_ext.len();
    let mut files_w = h_files.len();
    let mut code_w = h_code.len();
    let mut comm_w = h_comm.len();

    for (ext, totals) in &result.extensions {
        ext_w = ext_w.max(ext.len());
        files_w = files_w.max(totals.files.to_string().len());
        code_w = code_w.max(totals.code_lines.to_string().len());
        comm_w = comm_w.max(totals.comment_lines.to_string().len());
    }

    // margin of two, then round up to even
    ext_w += 2 + ext_w % 2;
    files_w += 2 + files_w % 2;
    code_w += 2 + code_w % 2;
    comm_w += 2 + comm_w % 2;

    let cyan = Style::new().cyan();
    let colorize = |s: &str| {
        if color {
            cyan.apply_to(s).to_string()
        } else {
            s.to_string()
        }
    };

    let h_line = format!(
        "+{}+{}+{}+{}+",
        "-".repeat(ext_w),
        "-".repeat(files_w),
        "-".repeat(code_w),
        "-".repeat(comm_w)
    );

    let mut out = String::new();
    out.push_str(&h_line);
    out.push('\n');
    out.push_str(&format!(
        "|{}|{}|{}|{}|\n",
        pad_center(h_ext, ext_w),
        pad_center(h_files, files_w),
        pad_center(h_code, code_w),
        pad_center(h_comm, comm_w)
    ));
    out.push_str(&h_line);
    out.push('\n');

    let mut total_files = 0u64;
    let mut total_code = 0u64;
    let mut total_comm = 0u64;

    for (ext, totals) in &result.extensions {
        total_files += totals.files;
        total_code += totals.code_lines;
        total_comm += totals.comment_lines;

        // styling adds invisible escape codes, so pad from the raw length
        let ext_cell = format!("{}{}", colorize(ext), " ".repeat(ext_w - ext.len()));
        out.push_str(&format!(
            "|{}|{}|{}|{}|\n",
            ext_cell,
            pad_center(&totals.files.to_string(), files_w),
            pad_center(&totals.code_lines.to_string(), code_w),
            pad_center(&totals.comment_lines.to_string(), comm_w)
        ));
    }

    out.push_str(&h_line);
    out.push('\n');
    out.push_str(&format!(
        "Total: Files={total_files}  Code={total_code}  Comments={total_comm}\n"
    ));
    out
}

/// Render the one-line quiet summary:
/// `<code+comments> (code: <code> comments: <comments>)`.
pub fn render_quiet(result: &ScanResult) -> String {
    let code = result.total_code();
    let comments = result.total_comments();
    format!("{} (code: {code} comments: {comments})", code + comments)
}

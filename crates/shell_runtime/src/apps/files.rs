use leptos::*;

struct FileRow {
    name: &'static str,
    is_folder: bool,
    modified: &'static str,
    size: &'static str,
}

const FILE_ROWS: [FileRow; 6] = [
    FileRow { name: "Documents", is_folder: true, modified: "Oct 12, 2024", size: "-" },
    FileRow { name: "Downloads", is_folder: true, modified: "Oct 14, 2024", size: "-" },
    FileRow { name: "Pictures", is_folder: true, modified: "Oct 10, 2024", size: "-" },
    FileRow { name: "budget_2024.xlsx", is_folder: false, modified: "Oct 15, 2024", size: "24 KB" },
    FileRow { name: "readme.txt", is_folder: false, modified: "Oct 16, 2024", size: "1 KB" },
    FileRow { name: "presentation.pptx", is_folder: false, modified: "Oct 13, 2024", size: "4.2 MB" },
];

#[component]
pub(super) fn FilesApp() -> impl IntoView {
    view! {
        <div class="app app-files">
            <div class="files-breadcrumb">
                <span>"My Files"</span>
                <span aria-hidden="true">" / "</span>
                <strong>"Home"</strong>
            </div>
            <table class="files-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Date Modified"</th>
                        <th>"Size"</th>
                    </tr>
                </thead>
                <tbody>
                    {FILE_ROWS
                        .iter()
                        .map(|row| {
                            let glyph = if row.is_folder { "▸" } else { "·" };
                            view! {
                                <tr>
                                    <td>
                                        <span class="files-glyph" aria-hidden="true">{glyph}</span>
                                        {row.name}
                                    </td>
                                    <td>{row.modified}</td>
                                    <td>{row.size}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

//! HTML table skeleton. Same row layout as the LaTeX table.
pub const FILE_NAME: &str = "summary.html";

pub const SKELETON: &str = r#"<!doctype html>
<html>
<head>
<style type="text/css">
caption {text-align: left;}
th {text-align: left;}
thead th {border-bottom: 1px solid black;}
tbody th {text-indent: 2em; padding-right: 1em;}
th.breakout {text-indent: 4em;}
</style>
</head>

<body>
<table>
  <caption>Summary processing statistics for {{tool_count}} DFXML-producing storage parsers.</caption>
  <thead>
    <tr>
      <th />
      {{html_tool_column_headers}}
    </tr>
  </thead>
  <tfoot></tfoot>
  <tbody>
    <tr><th>Partitions processed</th>{{html_row_s_parts_processed}}</tr>
    <tr><th>Allocated directories</th>{{html_row_s_allocated_dirs}}</tr>
    <tr><th>Allocated files</th>{{html_row_s_allocated_files}}</tr>
    <tr><th>Allocated other</th>{{html_row_s_allocated_other}}</tr>
    <tr><th>Unallocated directories</th>{{html_row_s_unallocated_dirs}}</tr>
    <tr><th>Unallocated files</th>{{html_row_s_unallocated_files}}</tr>
    <tr><th>Unallocated other</th>{{html_row_s_unallocated_other}}</tr>
  </tbody>
</table>
</body>
</html>"#;

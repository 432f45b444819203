//! LaTeX table skeleton.
//!
//! Only the success-prefixed rows are laid out. Failed sources keep their
//! `f/...` entries in the statistics map but have no row here, and neither
//! do the `unknown` allocation or type buckets.
pub const FILE_NAME: &str = "summary.tex";

pub const SKELETON: &str = r"\begin{table}[htdp]
\caption{Summary processing statistics for {{tool_count}} DFXML-producing storage parsers.}
\begin{center}
\begin{tabular}{|l|{{latex_column_aligns}}|}
\hline
{{latex_tool_column_headers}} \\
\hline
Partitions processed {{latex_row_s_parts_processed}} \\
Allocated directories {{latex_row_s_allocated_dirs}} \\
Allocated files {{latex_row_s_allocated_files}} \\
Allocated other {{latex_row_s_allocated_other}} \\
Unallocated directories {{latex_row_s_unallocated_dirs}} \\
Unallocated files {{latex_row_s_unallocated_files}} \\
Unallocated other {{latex_row_s_unallocated_other}} \\
\hline
\end{tabular}
\end{center}
\label{default}
\end{table}";

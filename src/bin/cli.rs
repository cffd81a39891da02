//! AtlasGraph CLI 工具
//!
//! 交互式命令行界面：构建图、运行算法、打印结果

use atlasgraph::algorithm::{Biconnectivity, MinSpanningTree, ShortestPaths, Traverser};
use atlasgraph::cli::Printer;
use atlasgraph::graph::Graph;
use atlasgraph::types::{GraphKind, Weight};
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "atlasgraph-cli")]
#[command(about = "AtlasGraph 命令行工具")]
struct Args {
    /// 构建有向图（默认无向图）
    #[arg(short, long)]
    directed: bool,

    /// 执行命令后退出（分号分隔多条命令）
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let kind = if args.directed {
        GraphKind::Directed
    } else {
        GraphKind::Undirected
    };
    let mut graph: Graph<String> = Graph::new(kind);

    println!("{}", "AtlasGraph CLI - 图结构与经典图算法".green().bold());
    println!("=====================================");
    println!(
        "图类型: {}",
        if args.directed { "有向图" } else { "无向图" }
    );

    // 单命令模式
    if let Some(script) = args.execute {
        for cmd in script.split(';') {
            let cmd = cmd.trim();
            if !cmd.is_empty() {
                handle_command(&mut graph, cmd)?;
            }
        }
        return Ok(());
    }

    // 交互模式
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("atlasgraph> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match handle_command(&mut graph, line) {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => println!("{} {}", "错误:".red(), e),
        }
    }

    println!("再见！");
    Ok(())
}

fn handle_command(
    graph: &mut Graph<String>,
    input: &str,
) -> Result<bool, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let cmd = parts[0].to_lowercase();
    let printer = Printer::new();

    match cmd.as_str() {
        "quit" | "exit" | "q" => return Ok(true),

        "help" | "h" | "?" => {
            print_help();
        }

        "stats" | "info" => {
            println!("{}", printer.stats(graph.vertex_count(), graph.edge_count()));
        }

        "addv" => {
            if parts.len() < 2 {
                println!("用法: addv <标签>...");
            } else {
                for label in &parts[1..] {
                    let idx = graph.add_vertex(label.to_string());
                    println!("顶点 {} -> 索引 {}", label, idx);
                }
            }
        }

        "adde" => {
            if parts.len() < 3 {
                println!("用法: adde <起点> <终点> [权重]");
            } else {
                let weight: Weight = match parts.get(3) {
                    Some(w) => w.parse()?,
                    None => 1,
                };
                graph.add_edge(&parts[1].to_string(), &parts[2].to_string(), weight)?;
                println!("已添加边 {} - {} (权重 {})", parts[1], parts[2], weight);
            }
        }

        "rmedge" => {
            if parts.len() < 3 {
                println!("用法: rmedge <起点> <终点>");
            } else {
                graph.remove_edge(&parts[1].to_string(), &parts[2].to_string())?;
                println!("已删除边 {} - {}", parts[1], parts[2]);
            }
        }

        "matrix" => {
            print!("{}", printer.adj_matrix(graph));
        }

        "list" => {
            print!("{}", printer.adj_list(graph));
        }

        "bfs" | "dfs" | "dfsi" => {
            if parts.len() < 2 {
                println!("用法: {} <起点>", cmd);
            } else {
                let traverser = Traverser::new(graph);
                let start = parts[1].to_string();
                let seq = match cmd.as_str() {
                    "bfs" => traverser.bfs(&start),
                    "dfs" => traverser.dfs_recursive(&start),
                    _ => traverser.dfs_iterative(&start),
                };
                if seq.is_empty() {
                    println!("顶点 {} 不存在", parts[1]);
                } else {
                    println!("{}", printer.traversal(&seq));
                }
            }
        }

        "dijkstra" => {
            if parts.len() < 2 {
                println!("用法: dijkstra <起点>");
            } else {
                let start = parts[1].to_string();
                let dist = ShortestPaths::new(graph).dijkstra(&start)?;
                if dist.is_empty() {
                    println!("顶点 {} 不存在", parts[1]);
                } else {
                    println!("{}", printer.distances(&start, &dist));
                }
            }
        }

        "floyd" => {
            print!("{}", printer.all_pairs(&ShortestPaths::new(graph).floyd()));
        }

        "prim" | "kruskal" => {
            let mst = MinSpanningTree::new(graph);
            let result = if cmd == "prim" {
                mst.prim()
            } else {
                mst.kruskal()
            };
            if result.is_empty() {
                println!("无结果（MST 仅支持顶点数 >= 2 的无向图）");
            } else {
                print!("{}", printer.mst(&result));
                if !result.spans(graph.vertex_count()) {
                    println!("{}", "注意: 图不连通，以上不是完整生成树".yellow());
                }
            }
        }

        "bcc" => {
            let result = Biconnectivity::new(graph).find();
            print!("{}", printer.biconnectivity(&result));
        }

        "json" => {
            if parts.len() < 2 {
                println!("用法: json <dijkstra 起点|floyd|prim|kruskal|bcc>");
            } else {
                print_json(graph, &parts[1..])?;
            }
        }

        "clear" => {
            graph.clear();
            println!("图已清空");
        }

        _ => {
            println!("未知命令: {}（输入 help 查看帮助）", cmd);
        }
    }

    Ok(false)
}

/// 以 JSON 输出算法结果
fn print_json(graph: &Graph<String>, parts: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    let output = match parts[0] {
        "dijkstra" => {
            if parts.len() < 2 {
                println!("用法: json dijkstra <起点>");
                return Ok(());
            }
            let dist = ShortestPaths::new(graph).dijkstra(&parts[1].to_string())?;
            serde_json::to_string_pretty(&dist)?
        }
        "floyd" => serde_json::to_string_pretty(&ShortestPaths::new(graph).floyd())?,
        "prim" => serde_json::to_string_pretty(&MinSpanningTree::new(graph).prim())?,
        "kruskal" => serde_json::to_string_pretty(&MinSpanningTree::new(graph).kruskal())?,
        "bcc" => serde_json::to_string_pretty(&Biconnectivity::new(graph).find())?,
        other => {
            println!("不支持的 json 子命令: {}", other);
            return Ok(());
        }
    };
    println!("{}", output);
    Ok(())
}

fn print_help() {
    println!(
        r#"
基础命令:
  help, h, ?             显示帮助
  quit, exit, q          退出程序
  stats, info            显示图统计信息
  clear                  清空图

构建命令:
  addv <标签>...         添加一个或多个顶点
  adde <起点> <终点> [权重]
                         添加边（权重默认 1）
  rmedge <起点> <终点>   删除边

查看命令:
  matrix                 输出邻接矩阵
  list                   输出邻接表

算法命令:
  bfs <起点>             广度优先遍历
  dfs <起点>             深度优先遍历（递归版）
  dfsi <起点>            深度优先遍历（迭代版）
  dijkstra <起点>        单源最短路径
  floyd                  多源最短路径
  prim                   最小生成树（Prim）
  kruskal                最小生成树（Kruskal）
  bcc                    关节点与双连通分量

输出命令:
  json <dijkstra 起点|floyd|prim|kruskal|bcc>
                         以 JSON 格式输出算法结果

示例:
  addv A B C D
  adde A B 1
  adde B C 1
  bfs A
  prim
"#
    );
}

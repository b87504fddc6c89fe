//! Tasks command handler.

use anyhow::{Result, bail};
use hfup_core::metadata::{Task, find_task, tasks};

/// Execute the tasks command.
pub fn execute(id: Option<&str>) -> Result<()> {
    match id {
        Some(id) => {
            let Some(task) = find_task(id) else {
                let known: Vec<&str> = tasks().iter().map(|t| t.id).collect();
                bail!("Unknown task '{id}'. Known tasks: {}", known.join(", "));
            };
            print_task(task);
        }
        None => {
            println!("{:<32} {}", "TASK", "SUMMARY");
            for task in tasks() {
                println!("{:<32} {}", task.id, task.summary);
            }
        }
    }
    Ok(())
}

fn print_task(task: &Task) {
    println!("{} ({})", task.label, task.id);
    println!("  {}", task.summary);
    println!("  Datasets: {}", task.datasets.join(", "));
    println!("  Metrics:  {}", task.metrics.join(", "));
    println!("  Models:   {}", task.models.join(", "));
}

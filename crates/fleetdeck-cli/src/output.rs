use fleetdeck_dash::page::{ArchitecturePage, OverviewPage, SecurityPage};
use fleetdeck_dash::view::NodeAction;

pub fn print_overview(page: &OverviewPage) {
    println!("\n=== Fleet Overview ===");

    let ov = &page.overview;
    println!("\n[Summary]");
    println!(
        "  Nodes:     {} total ({} online, {} busy, {} offline)",
        ov.total_nodes, ov.node_counts.online, ov.node_counts.busy, ov.node_counts.offline
    );
    println!("  Jobs:      {} active, {} queued", ov.active_jobs, ov.queued_jobs);
    println!("  CPU:       {}% [{}]", ov.mean_cpu, ov.cpu_tag.as_str());
    if ov.security.secure {
        println!("  Security:  secure ({} open findings)", ov.security.open_findings);
    } else {
        println!("  Security:  at risk ({} open findings)", ov.security.open_findings);
    }

    println!("\n[Nodes]");
    if page.nodes.is_empty() {
        println!("  (No nodes registered)");
    } else {
        println!(
            "  {:<22} {:<10} {:<14} {:<8} {:>4} {:>6}  {:<16}",
            "Name", "Status", "Arch", "Jobs", "CPU", "Memory", "Last Seen"
        );
        for node in &page.nodes {
            println!(
                "  {:<22} {:<10} {:<14} {:<8} {:>3}% {:>5}%  {:<16}",
                node.name,
                node.badge.label,
                node.architecture,
                node.jobs_label,
                node.cpu,
                node.memory,
                node.last_seen
            );
            let actions: Vec<&str> = node
                .actions
                .iter()
                .map(|a| match a {
                    NodeAction::Connect => "connect",
                    NodeAction::Pause => "pause",
                    NodeAction::Resume => "resume",
                })
                .collect();
            println!(
                "  {:<22} slots {:>5.1}%  actions: {}",
                "", node.job_progress, actions.join(", ")
            );
        }
    }

    println!("\n[Jobs]");
    if page.jobs.is_empty() {
        println!("  (No jobs)");
    } else {
        println!(
            "  {:<10} {:<20} {:<32} {:>8}  {:<18}",
            "Status", "Name", "Node", "Progress", "Duration"
        );
        for job in &page.jobs {
            println!(
                "  {:<10} {:<20} {:<32} {:>7}%  {:<18}",
                job.badge.label, job.name, job.node_label, job.progress, job.duration
            );
        }
        let counts = &page.job_counts;
        println!(
            "\n  running {} | queued {} | completed {} | failed {}",
            counts.running, counts.queued, counts.completed, counts.failed
        );
    }
    println!();
}

pub fn print_security(page: &SecurityPage) {
    println!("\n=== Security Posture ===");

    println!("\n[Metrics]");
    if page.metrics.is_empty() {
        println!("  (No security metrics)");
    } else {
        println!(
            "  {:<24} {:<10} {:<8} {}",
            "Metric", "Status", "Enabled", "Description"
        );
        for metric in &page.metrics {
            println!(
                "  {:<24} {:<10} {:<8} {}",
                metric.title,
                metric.badge.label,
                if metric.enabled { "yes" } else { "no" },
                metric.description
            );
        }
    }

    println!("\n[Vulnerabilities]");
    if page.vulnerabilities.is_empty() {
        println!("  (No known vulnerabilities)");
    } else {
        for vuln in &page.vulnerabilities {
            println!(
                "  [{}] {} ({})",
                vuln.severity_label, vuln.title, vuln.node
            );
            println!("      {}", vuln.description);
            println!("      Recommendation: {}", vuln.recommendation);
        }
    }

    println!("\n[Policies]");
    if page.policies.is_empty() {
        println!("  (No policies configured)");
    } else {
        for policy in &page.policies {
            println!(
                "  {:<3} {:<32} {}",
                if policy.enabled { "on" } else { "off" },
                policy.title,
                policy.description
            );
        }
    }
    println!();
}

pub fn print_architecture(page: &ArchitecturePage) {
    println!("\n=== Architecture Pools ===");

    println!("\n[Pools]");
    if page.pools.is_empty() {
        println!("  (No pools)");
    } else {
        println!(
            "  {:<16} {:<16} {:>5} {:>8} {:>6}  {:<12} {}",
            "Name", "Identifier", "Nodes", "Jobs", "Usage", "Band", "Popular"
        );
        for pool in &page.pools {
            println!(
                "  {:<16} {:<16} {:>5} {:>8} {:>5}%  {:<12} {}",
                pool.name,
                pool.identifier,
                pool.nodes,
                pool.jobs_label,
                pool.usage,
                pool.usage_tag.as_str(),
                if pool.popular { "yes" } else { "" }
            );
        }
    }

    println!("\n[Job Templates]");
    if page.templates.is_empty() {
        println!("  (No templates)");
    } else {
        for template in &page.templates {
            println!(
                "  {:<20} frequency {:<7} avg {:<9} ({} archs)",
                template.name,
                template.frequency,
                template.avg_duration,
                template.architectures.len()
            );
            for arch in &template.architectures {
                match &arch.pool_name {
                    Some(name) => println!("      {} ({})", arch.id, name),
                    None => println!("      {}", arch.id),
                }
            }
        }
    }
    println!();
}

//! Shared helpers for end-to-end tests
//!
//! Each test launches its own `mc-dashboardd` on a free loopback port with a
//! stand-in server command, and talks to it over HTTP. The daemon is killed
//! when the returned guard drops, even on panic.

#![allow(dead_code)]

use std::net::TcpListener;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};

const STARTUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Running daemon, killed on drop
pub struct DaemonGuard {
    child: Child,
    pub base_url: String,
    agent: ureq::Agent,
}

impl Drop for DaemonGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Response reduced to what the tests inspect
#[derive(Debug)]
pub struct Reply {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn daemon_command(server_dir: &Path, command: &str, args: &str, port: u16) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mc-dashboardd"));
    cmd.env("MCD_BIND_HOST", "127.0.0.1")
        .env("MCD_PORT", port.to_string())
        .env("MCD_SERVER_DIR", server_dir)
        .env("MCD_SERVER_COMMAND", command)
        .env("MCD_SERVER_ARGS", args)
        .env("MCD_LOG_LEVEL", "debug")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit());
    cmd
}

/// Start the daemon supervising `command args` and wait until it serves HTTP
pub fn setup_daemon(server_dir: &Path, command: &str, args: &str) -> DaemonGuard {
    let port = free_port();
    let child = daemon_command(server_dir, command, args, port)
        .spawn()
        .expect("failed to spawn mc-dashboardd");

    let guard = DaemonGuard {
        child,
        base_url: format!("http://127.0.0.1:{}", port),
        agent: ureq::AgentBuilder::new()
            .redirects(0)
            .timeout(Duration::from_secs(5))
            .build(),
    };

    let deadline = Instant::now() + STARTUP_TIMEOUT;
    while Instant::now() < deadline {
        if guard.agent.get(&guard.url("/status")).call().is_ok() {
            return guard;
        }
        sleep(Duration::from_millis(50));
    }
    panic!("mc-dashboardd did not come up on port {}", port);
}

/// Run the daemon to completion, expecting it to exit on its own
pub fn run_daemon_until_exit(server_dir: &Path, command: &str, args: &str) -> ExitStatus {
    let mut child = daemon_command(server_dir, command, args, free_port())
        .spawn()
        .expect("failed to spawn mc-dashboardd");

    let deadline = Instant::now() + STARTUP_TIMEOUT;
    while Instant::now() < deadline {
        if let Some(status) = child.try_wait().unwrap() {
            return status;
        }
        sleep(Duration::from_millis(50));
    }
    let _ = child.kill();
    panic!("mc-dashboardd kept running");
}

impl DaemonGuard {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get(&self, path: &str) -> Reply {
        Self::reply(self.agent.get(&self.url(path)).call())
    }

    pub fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Reply {
        Self::reply(self.agent.post(&self.url(path)).send_form(fields))
    }

    /// Poll `path` until its body contains `needle`
    pub fn wait_for_body(&self, path: &str, needle: &str) -> Reply {
        let deadline = Instant::now() + STARTUP_TIMEOUT;
        loop {
            let reply = self.get(path);
            if reply.body.contains(needle) || Instant::now() >= deadline {
                return reply;
            }
            sleep(Duration::from_millis(50));
        }
    }

    fn reply(result: Result<ureq::Response, ureq::Error>) -> Reply {
        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(e) => panic!("request failed: {}", e),
        };
        let status = response.status();
        let location = response.header("location").map(str::to_string);
        let body = response.into_string().unwrap();
        Reply {
            status,
            location,
            body,
        }
    }
}

use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::{info, log, warn, Level};
use rocket::{
    fairing::{Fairing, Info, Kind},
    http::StatusClass,
    request::{FromRequest, Outcome},
    Data, Orbit, Request, Response, Rocket, Route,
};

/// Tags every log line written while handling one request, so a login or a
/// vote can be followed from the `->req` line to the matching `<-rsp` line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct RequestId(pub usize);

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl RequestId {
    /// Hand out the next ID, wrapping at `usize::MAX`.
    pub fn next() -> RequestId {
        static ISSUED: AtomicUsize = AtomicUsize::new(0);
        RequestId(ISSUED.fetch_add(1, Ordering::Relaxed))
    }

    /// The ID of `req`, assigned on first use.
    fn of(req: &Request<'_>) -> RequestId {
        *req.local_cache(RequestId::next)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for &'r RequestId {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(req.local_cache(RequestId::next))
    }
}

/// When the portal started handling a request.
struct Received(Instant);

/// How a handled request is named in the response log line: the handler and
/// its mount point, or a marker when nothing matched and a catcher answered.
struct RouteLabel<'a>(Option<&'a Route>);

impl Display for RouteLabel<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(Route {
                name: Some(name),
                uri,
                ..
            }) => write!(f, "{name} ({uri})"),
            Some(route) => write!(f, "{}", route.uri),
            None => f.write_str("no route"),
        }
    }
}

/// Refused logins and votes log as warnings, server faults as errors.
fn level_for(class: StatusClass) -> Level {
    match class {
        StatusClass::ServerError => Level::Error,
        StatusClass::ClientError => Level::Warn,
        _ => Level::Info,
    }
}

/// Logs the portal starting and stopping, and one line per request and response.
#[derive(Debug, Copy, Clone)]
pub struct LoggerFairing;

#[rocket::async_trait]
impl Fairing for LoggerFairing {
    fn info(&self) -> Info {
        Info {
            name: "Request logger",
            kind: Kind::Liftoff | Kind::Request | Kind::Response | Kind::Shutdown,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let config = rocket.config();
        let scheme = if config.tls_enabled() { "https" } else { "http" };
        info!(
            "Voting portal listening on {scheme}://{}:{}",
            config.address, config.port
        );
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        let id = RequestId::of(req);
        req.local_cache(|| Received(Instant::now()));
        info!("->req{id} {} {}", req.method(), req.uri());
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let id = RequestId::of(req);
        let took = req.local_cache(|| Received(Instant::now())).0.elapsed();
        let status = res.status();
        log!(
            level_for(status.class()),
            "<-rsp{id} {status} {} in {}ms",
            RouteLabel(req.route()),
            took.as_millis()
        );
    }

    async fn on_shutdown(&self, _rocket: &Rocket<Orbit>) {
        warn!("Voting portal shutting down, in-memory votes will be lost");
    }
}

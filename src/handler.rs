//! Line handler
//!
//! Answers `<identifier> <secret>` lines with one reply line each. Input is
//! read as raw bytes and decoded lossily, so a line that is not valid UTF-8
//! still gets a reply instead of ending the session.

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::{AuthenticationRequest, Authenticator, CredentialsMatcher};
use crate::error::RealmError;
use crate::error::handlers::error_to_reply_code;
use crate::store::AccountStore;

/// Builds the reply for one request, without a line terminator.
pub fn reply_for<S, M>(
    authenticator: &Authenticator<S, M>,
    request: &AuthenticationRequest,
) -> String
where
    S: AccountStore,
    M: CredentialsMatcher,
{
    match authenticator.authenticate(request) {
        Ok(principal) => format!("230 {} authenticated", principal.identifier),
        Err(e) => {
            let code = error_to_reply_code(&RealmError::Auth(e.clone()));
            format!("{} {}", code, e)
        }
    }
}

/// Handles one raw input line. Returns `None` for blank lines.
pub fn handle_line<S, M>(authenticator: &Authenticator<S, M>, raw: &[u8]) -> Option<String>
where
    S: AccountStore,
    M: CredentialsMatcher,
{
    let line = String::from_utf8_lossy(raw);
    let request = AuthenticationRequest::parse_line(&line)?;
    Some(reply_for(authenticator, &request))
}

/// Reads lines from `reader` until end of input, writing one reply per
/// non-blank line to `writer`. Returns the number of replies written.
pub async fn serve_lines<S, M, R, W>(
    authenticator: &Authenticator<S, M>,
    mut reader: R,
    mut writer: W,
) -> Result<usize, RealmError>
where
    S: AccountStore,
    M: CredentialsMatcher,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut replies = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Input closed after {} replies", replies);
            return Ok(replies);
        }

        let Some(reply) = handle_line(authenticator, &buf) else {
            debug!("Skipping blank line");
            continue;
        };

        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        replies += 1;
    }
}

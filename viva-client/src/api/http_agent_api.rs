use crate::api::AgentApi;
use crate::error::ClientError;
use crate::recording::EncodedAudio;
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use viva_core::{
    AudioReply, NextQuestionRequest, ProcessAudioReply, ProcessAudioRequest, ReportResponse,
    RoomId, StartInterviewRequest,
};

/// [`AgentApi`] over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpAgentApi {
    client: Client,
    base: String,
}

impl HttpAgentApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(client: Client, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_owned();
        Self { client, base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/agent/{}", self.base, path)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            error!(%url, "Agent API request failed: {}", e);
            ClientError::from(e)
        })?;
        decode(response).await
    }

    /// `get-report/{room}`, with the room id encoded as a single path segment.
    fn report_url(&self, room: &RoomId) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.endpoint("get-report"))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base, e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base.clone()))?
            .push(room.as_str());
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            error!(%url, "Agent API request failed: {}", e);
            ClientError::from(e)
        })?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let body = String::from_utf8_lossy(&body).into_owned();
        error!(status = status.as_u16(), "Agent API error: {}", body);
        return Err(ClientError::Api {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl AgentApi for HttpAgentApi {
    async fn start_interview(
        &self,
        room: &RoomId,
        candidate_name: &str,
    ) -> Result<AudioReply, ClientError> {
        let body = StartInterviewRequest {
            room_id: room.clone(),
            candidate_name: candidate_name.to_owned(),
        };
        self.post("start-interview", &body).await
    }

    async fn next_question(&self, room: &RoomId) -> Result<AudioReply, ClientError> {
        let body = NextQuestionRequest {
            room_id: room.clone(),
        };
        self.post("next-question", &body).await
    }

    async fn process_audio(
        &self,
        room: &RoomId,
        audio: &EncodedAudio,
    ) -> Result<ProcessAudioReply, ClientError> {
        let body = ProcessAudioRequest {
            room_id: room.clone(),
            audio_data: audio.to_base64(),
        };
        self.post("process-audio", &body).await
    }

    async fn report(&self, room: &RoomId) -> Result<ReportResponse, ClientError> {
        self.get(self.report_url(room)?).await
    }

    fn resolve_audio(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            reference.to_owned()
        } else if reference.starts_with('/') {
            format!("{}{}", self.base, reference)
        } else {
            format!("{}/{}", self.base, reference)
        }
    }
}

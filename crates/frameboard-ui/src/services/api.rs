//! HTTP client for the dashboard backend (REST).

use async_trait::async_trait;
use frameboard_api_models::{
    Album, AlbumTracking, AssignGroupRequest, CreateGroupRequest, CreateGroupResponse, DeviceMap,
    Group, GroupMap, GroupMember, GroupUpdate, ImmichConfigUpdate, ImmichStatus,
    WakeupIntervalUpdate, routes,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::config::ClientConfig;
use crate::core::error::{ApiError, ApiResult};
use crate::core::sync::DashboardApi;

/// Browser `fetch` client bound to one backend origin.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn send(path: &str, request: Request) -> ApiResult<Response> {
        let response = request.send().await.map_err(|err| ApiError::Transport {
            path: path.to_string(),
            message: err.to_string(),
        })?;
        if !response.ok() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Self::send(path, Request::get(&self.config.url(path))).await?;
        response.json::<T>().await.map_err(|err| ApiError::Decode {
            path: path.to_string(),
            message: err.to_string(),
        })
    }

    fn with_body<B: Serialize + ?Sized>(path: &str, request: Request, body: &B) -> ApiResult<Request> {
        request.json(body).map_err(|err| ApiError::Encode {
            path: path.to_string(),
            message: err.to_string(),
        })
    }

    async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let request = Self::with_body(path, Request::put(&self.config.url(path)), body)?;
        Self::send(path, request).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl DashboardApi for ApiClient {
    async fn fetch_devices(&self) -> ApiResult<DeviceMap> {
        self.get_json(routes::DEVICES).await
    }

    async fn assign_device(
        &self,
        device_id: &str,
        request: &AssignGroupRequest,
    ) -> ApiResult<()> {
        self.put_json(&routes::device_group(device_id), request).await
    }

    async fn fetch_groups(&self) -> ApiResult<GroupMap> {
        self.get_json(routes::GROUPS).await
    }

    async fn create_group(&self, request: &CreateGroupRequest) -> ApiResult<CreateGroupResponse> {
        let path = routes::GROUPS;
        let post = Self::with_body(path, Request::post(&self.config.url(path)), request)?;
        let response = Self::send(path, post).await?;
        response
            .json::<CreateGroupResponse>()
            .await
            .map_err(|err| ApiError::Decode {
                path: path.to_string(),
                message: err.to_string(),
            })
    }

    async fn fetch_group(&self, group_id: &str) -> ApiResult<Group> {
        self.get_json(&routes::group(group_id)).await
    }

    async fn update_group(&self, group_id: &str, update: &GroupUpdate) -> ApiResult<()> {
        self.put_json(&routes::group(group_id), update).await
    }

    async fn delete_group(&self, group_id: &str) -> ApiResult<()> {
        let path = routes::group(group_id);
        Self::send(&path, Request::delete(&self.config.url(&path)))
            .await
            .map(|_| ())
    }

    async fn fetch_group_devices(&self, group_id: &str) -> ApiResult<Vec<GroupMember>> {
        self.get_json(&routes::group_devices(group_id)).await
    }

    async fn fetch_albums(&self) -> ApiResult<Vec<Album>> {
        self.get_json(routes::ALBUMS).await
    }

    async fn fetch_tracking(&self, group_id: &str, album_id: &str) -> ApiResult<AlbumTracking> {
        self.get_json(&routes::album_tracking(group_id, album_id))
            .await
    }

    async fn reset_tracking(&self, group_id: &str, album_id: &str) -> ApiResult<()> {
        let path = routes::album_tracking_reset(group_id, album_id);
        Self::send(&path, Request::post(&self.config.url(&path)))
            .await
            .map(|_| ())
    }

    async fn fetch_immich_status(&self) -> ApiResult<ImmichStatus> {
        self.get_json(routes::IMMICH_STATUS).await
    }

    async fn update_wakeup_interval(&self, update: &WakeupIntervalUpdate) -> ApiResult<()> {
        self.put_json(routes::CONFIG_WAKEUP_INTERVAL, update).await
    }

    async fn update_immich_config(&self, update: &ImmichConfigUpdate) -> ApiResult<()> {
        self.put_json(routes::CONFIG_IMMICH, update).await
    }
}

/// Generates the CRUD surface shared by the typed store clients.
///
/// `get_*` turns a missing record into `NotFound`, `update_*` turns a
/// missing id into `ConditionsNotMet`; everything else is forwarded to the
/// underlying [`ResourceClient`](crate::actor_framework::ResourceClient).
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $create:ty, $update:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                    Self { inner }
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: u64) -> $crate::error::FilmorateResult<$entity> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await?.ok_or_else(|| {
                        $crate::error::FilmorateError::not_found(
                            <$entity as $crate::actor_framework::Entity>::KIND,
                            id,
                        )
                    })
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<list_ $entity_name_snake s>](&self) -> $crate::error::FilmorateResult<Vec<$entity>> {
                    tracing::debug!("Sending request");
                    self.inner.list().await
                }

                #[tracing::instrument(skip(self, params))]
                pub async fn [<create_ $entity_name_snake>](&self, params: $create) -> $crate::error::FilmorateResult<$entity> {
                    tracing::debug!("Sending request");
                    self.inner.create(params).await
                }

                #[tracing::instrument(skip(self, update), fields(id = ?update.id))]
                pub async fn [<update_ $entity_name_snake>](&self, update: $update) -> $crate::error::FilmorateResult<$entity> {
                    tracing::debug!("Sending request");
                    let id = $crate::validation::require_id(
                        update.id,
                        <$entity as $crate::actor_framework::Entity>::KIND,
                    )?;
                    self.inner.update(id, update).await
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $entity_name_snake>](&self, id: u64) -> $crate::error::FilmorateResult<$entity> {
                    tracing::debug!("Sending request");
                    self.inner.delete(id).await
                }
            }
        }
    };
}

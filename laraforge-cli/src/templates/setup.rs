//! Setup file drops and registration baselines
//!
//! None of these carry placeholders; they are written verbatim, gated on the
//! target not already existing.

/// Baseline for `app/Providers/RepositoryServiceProvider.php`, materialized
/// when the provider does not exist yet; bindings and imports are spliced in
/// by the registration mutator afterwards
pub const PROVIDER: &str = r"<?php

namespace App\Providers;

use Illuminate\Support\ServiceProvider;

class RepositoryServiceProvider extends ServiceProvider
{
    /**
     * Register repository bindings.
     */
    public function register(): void
    {
    }

    /**
     * Bootstrap any application services.
     */
    public function boot(): void
    {
    }
}
";

/// `app/Http/Middleware/DBTransaction.php`: wraps every request in a
/// database transaction, rolling back on error responses and exceptions
pub const DB_TRANSACTION_MIDDLEWARE: &str = r"<?php

namespace App\Http\Middleware;

use Closure;
use Illuminate\Http\Request;
use Illuminate\Support\Facades\DB;
use Symfony\Component\HttpFoundation\Response;

class DBTransaction
{
    public function handle(Request $request, Closure $next): Response
    {
        DB::beginTransaction();

        try {
            $response = $next($request);

            if ($response->getStatusCode() >= 400) {
                DB::rollBack();
            } else {
                DB::commit();
            }

            return $response;
        } catch (\Throwable $e) {
            DB::rollBack();

            throw $e;
        }
    }
}
";

/// `app/Helpers/functions.php`: response helpers autoloaded via the
/// manifest's `autoload.files` entry
pub const HELPER_FUNCTIONS: &str = r"<?php

use Illuminate\Http\JsonResponse;

if (!function_exists('api_response')) {
    function api_response($data = null, string $message = '', int $status = 200): JsonResponse
    {
        return response()->json([
            'success' => $status < 400,
            'message' => $message,
            'data' => $data,
        ], $status);
    }
}

if (!function_exists('api_error')) {
    function api_error(string $message, int $status = 400, $errors = null): JsonResponse
    {
        return response()->json([
            'success' => false,
            'message' => $message,
            'errors' => $errors,
        ], $status);
    }
}
";
